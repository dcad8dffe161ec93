//! Shared utilities for WorthyTrust.

pub mod display;
pub mod logging;
pub mod time;

pub use display::{format_crypto, format_currency, format_percentage, hide_balance, BalanceKind};
pub use logging::{init_logging, LogFormat, LoggingError};
pub use time::days_remaining_label;
