//! Structured logging initialisation.
//!
//! Two output formats are supported:
//! - [`LogFormat::Human`]: readable lines for local use.
//! - [`LogFormat::Json`]: newline-delimited JSON for log aggregation.
//!
//! `RUST_LOG` takes precedence over the caller-supplied `level`
//! (e.g. `"info"`, `"debug,worthy_validation=trace"`).

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter '{0}': {1}")]
    InvalidFilter(String, String),

    #[error("unknown log format '{0}' (expected 'human' or 'json')")]
    UnknownFormat(String),

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Selects the output format for structured logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnknownFormat(other.to_string())),
        }
    }
}

fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| LoggingError::InvalidFilter(level.to_string(), e.to_string())),
    }
}

/// Install the global tracing subscriber.
///
/// Returns [`LoggingError::AlreadyInitialized`] on a second call instead of
/// panicking, so embedding applications and tests can call it freely.
pub fn init_logging(format: LogFormat, level: &str) -> Result<(), LoggingError> {
    let filter = build_filter(level)?;

    let result = match format {
        LogFormat::Human => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .try_init(),
    };
    result.map_err(|_| LoggingError::AlreadyInitialized)
}
