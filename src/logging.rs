//! Tracing subscriber setup
//!
//! Call [`init`] once at startup, after configuration is loaded.

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{RelayError, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level when it parses.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::default().add_directive(parse_level(&config.level)?.into()),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match config.format {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    installed.map_err(|e| RelayError::Logger(format!("failed to set subscriber: {}", e)))
}

/// Validate a level string before it reaches the subscriber
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    if level.is_empty() {
        return Err(RelayError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| RelayError::Logger(format!("unrecognised log level: '{}'", level)))
}
