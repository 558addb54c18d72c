//! DFA Trace
//!
//! A deterministic finite automaton simulator that records a complete,
//! ordered trace of every transition taken.
//!
//! This library provides functionality for:
//! - Defining DFAs as immutable, validated transition tables
//! - Loading user-defined automata from TOML files
//! - Simulating an automaton over an input string, producing a verdict and a
//!   per-symbol trace
//! - Formatting simulation results for table or JSON output

pub mod automaton;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod simulator;

pub use automaton::{Dfa, StateId};
pub use config::Config;
pub use error::{Error, Result};
pub use report::Report;
pub use simulator::{SimulationResult, TransitionRecord, simulate};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "dfa-trace");
    }

    #[test]
    fn test_init_logging_applies_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            // An explicit env filter overrides the configured level by design
            return;
        }

        init_logging("debug");
        assert!(tracing::enabled!(tracing::Level::DEBUG));
        assert!(!tracing::enabled!(tracing::Level::TRACE));
    }
}
