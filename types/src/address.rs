//! Ethereum-style wallet address type (`0x` + 40 hex digits).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WorthyError;

/// Length of a well-formed address including the `0x` prefix.
pub const ADDRESS_LEN: usize = 42;

/// Whether `raw` is exactly `0x` followed by 40 hexadecimal characters.
///
/// No EIP-55 checksum validation is performed; mixed case is accepted as-is.
pub fn is_ethereum_address(raw: &str) -> bool {
    raw.len() == ADDRESS_LEN
        && raw.starts_with(WalletAddress::PREFIX)
        && raw[WalletAddress::PREFIX.len()..]
            .bytes()
            .all(|b| b.is_ascii_hexdigit())
}

/// A syntactically valid wallet address, stored lower-cased.
///
/// Comparisons between addresses are case-insensitive because the
/// canonical form is normalized at construction.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    /// The prefix every address carries.
    pub const PREFIX: &'static str = "0x";

    /// Parse and normalize an address. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, WorthyError> {
        let trimmed = raw.trim();
        if !is_ethereum_address(trimmed) {
            return Err(WorthyError::InvalidAddress(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// Return the normalized address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short label used when a trustee has no display name, e.g. `0xabcd...`.
    pub fn short_label(&self) -> String {
        short_label(&self.0)
    }
}

/// `0xabcd...` style label over the first six characters of `raw`.
pub fn short_label(raw: &str) -> String {
    let head: String = raw.chars().take(6).collect();
    format!("{head}...")
}

/// Lower-case form used for every address comparison.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = WorthyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<WalletAddress> for String {
    fn from(address: WalletAddress) -> Self {
        address.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_forty_hex_digits() {
        let raw = format!("0x{}", "a".repeat(40));
        assert!(is_ethereum_address(&raw));
        assert!(WalletAddress::parse(&raw).is_ok());
    }

    #[test]
    fn rejects_short_and_non_hex() {
        assert!(!is_ethereum_address("0x123"));
        assert!(!is_ethereum_address(&format!("0x{}", "g".repeat(40))));
        assert!(!is_ethereum_address(&format!("0X{}", "a".repeat(40))));
        assert!(!is_ethereum_address(""));
    }

    #[test]
    fn parse_lowercases_and_trims() {
        let raw = format!("  0x{}  ", "AbCdEf0123".repeat(4));
        let address = WalletAddress::parse(&raw).unwrap();
        assert_eq!(address.as_str(), format!("0x{}", "abcdef0123".repeat(4)));
    }

    #[test]
    fn parse_error_carries_input() {
        let err = WalletAddress::parse("0xnope").unwrap_err();
        assert!(matches!(err, WorthyError::InvalidAddress(ref s) if s == "0xnope"));
    }

    #[test]
    fn short_label_takes_six_chars() {
        assert_eq!(short_label("0x1234567890"), "0x1234...");
    }

    #[test]
    fn serde_rejects_malformed_address() {
        let ok: Result<WalletAddress, _> =
            serde_json::from_str(&format!("\"0x{}\"", "1".repeat(40)));
        assert!(ok.is_ok());
        let bad: Result<WalletAddress, _> = serde_json::from_str("\"0x1\"");
        assert!(bad.is_err());
    }
}
