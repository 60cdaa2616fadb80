//! Log output for the normalizer binary.
//!
//! Events always go to stderr; stdout carries only normalized output, so
//! piping `normalize-name lines` into another tool stays clean at any level.

use crate::config::TelemetryConfig;
use std::io::IsTerminal;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("APP_LOG_LEVEL '{directive}' is not a valid tracing filter")]
    Filter {
        directive: String,
        #[source]
        source: ParseError,
    },
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// `RUST_LOG` wins when it parses; otherwise the configured level applies.
pub fn filter_for(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::Filter {
        directive: config.log_level.clone(),
        source,
    })
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = filter_for(config)?;
    let ansi = std::io::stderr().is_terminal();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: level.to_string(),
        }
    }

    #[test]
    fn configured_level_builds_a_filter() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = filter_for(&config("name_normalizer=debug,warn")).expect("filter builds");
        assert!(filter.to_string().contains("name_normalizer=debug"));
    }

    #[test]
    fn malformed_level_names_the_directive() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = filter_for(&config("name_normalizer=notalevel")).expect_err("rejected");
        assert!(matches!(err, TelemetryError::Filter { .. }));
        assert!(err.to_string().contains("name_normalizer=notalevel"));
    }
}
