//! DFA Trace

use clap::Parser;
use dfa_trace::{Config, Error, Result, VERSION, cli, init_logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(args: cli::Cli) -> Result<()> {
    let config = if let Some(config_path) = &args.config {
        Config::from_file(config_path)?
    } else {
        Config::load()?
    };

    init_logging(&config.logging.level);

    tracing::info!("DFA Trace v{}", VERSION);
    tracing::debug!("Parsed arguments: {:?}", args);
    tracing::debug!("Loaded configuration: {:?}", config);

    cli::execute(args, config)
}

/// Input mistakes (empty string, bad symbol, oversized input) exit with 2 so
/// scripts can tell them apart from tool failures
fn exit_code(err: &Error) -> u8 {
    if err.is_input_error() { 2 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_distinguishes_input_errors() {
        assert_eq!(exit_code(&Error::EmptyInput), 2);
        assert_eq!(
            exit_code(&Error::InvalidSymbol {
                position: 0,
                symbol: 'z'
            }),
            2
        );
        assert_eq!(exit_code(&Error::custom("boom")), 1);
    }
}
