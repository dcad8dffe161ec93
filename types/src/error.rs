//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for WorthyTrust data handling.
#[derive(Debug, Error)]
pub enum WorthyError {
    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid month {month} for year {year}")]
    InvalidMonth { month: u32, year: i32 },

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
