//! Syntax checks for single input values.
//!
//! Every check is a pure predicate: malformed input yields `false`, never an
//! error.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use worthy_types::address;
use worthy_types::time::parse_date_time;

use crate::config::ValidationLimits;
use crate::rules::FieldValue;

/// Letters, digits, whitespace, `-`, `_` and `'`.
pub static TRUST_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9\s\-_']+$").expect("trust name pattern is valid")
});

/// Minimal `local@domain.tld` shape.
pub static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// `0x` followed by exactly 40 hex digits. No checksum validation.
pub fn is_valid_ethereum_address(address: &str) -> bool {
    address::is_ethereum_address(address)
}

/// No whitespace, a single `@`, and a dot inside the domain with text on both
/// sides of it.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Trust name within the default length bounds and character set.
pub fn is_valid_trust_name(name: &str) -> bool {
    is_valid_trust_name_within(name, &ValidationLimits::default())
}

pub fn is_valid_trust_name_within(name: &str, limits: &ValidationLimits) -> bool {
    let len = name.chars().count();
    (limits.trust_name_min_len..=limits.trust_name_max_len).contains(&len)
        && TRUST_NAME_PATTERN.is_match(name)
}

/// Coerce `value` to a finite number and check it is strictly above `min`.
pub fn is_valid_amount(value: &FieldValue<'_>, min: f64) -> bool {
    value
        .as_number()
        .is_some_and(|n| n.is_finite() && n > min)
}

/// Whether `date` parses and lies strictly after `now`.
pub fn is_valid_future_date(date: &str, now: NaiveDateTime) -> bool {
    parse_date_time(date).is_ok_and(|d| d > now)
}

/// Parse the longest numeric prefix of `text`, as a lenient number input does
/// (`"12.5 ETH"` is 12.5). Blank or non-numeric text yields `None`.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(s.len());
    let candidate = &s[..end];
    (1..=candidate.len())
        .rev()
        .filter(|&i| candidate.is_char_boundary(i))
        .find_map(|i| candidate[..i].parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn ethereum_address_examples() {
        assert!(is_valid_ethereum_address(&format!("0x{}", "a".repeat(40))));
        assert!(is_valid_ethereum_address(&format!("0x{}", "A1".repeat(20))));
        assert!(!is_valid_ethereum_address("0x123"));
        assert!(!is_valid_ethereum_address(&format!("0x{}", "a".repeat(41))));
        assert!(!is_valid_ethereum_address(&format!(" 0x{}", "a".repeat(40))));
    }

    #[test]
    fn email_examples() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("alice example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@@example.com"));
        assert!(!is_valid_email("alice@.com"));
        assert!(!is_valid_email("alice@example."));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn trust_name_examples() {
        assert!(is_valid_trust_name("O'Brien Family-Trust_2"));
        assert!(!is_valid_trust_name("ab"));
        assert!(!is_valid_trust_name(&"x".repeat(101)));
        assert!(is_valid_trust_name(&"x".repeat(100)));
        assert!(!is_valid_trust_name("Trust #1"));
        assert!(!is_valid_trust_name("Caf\u{e9} Trust"));
    }

    #[test]
    fn trust_name_follows_configured_bounds() {
        let limits = ValidationLimits {
            trust_name_min_len: 5,
            trust_name_max_len: 8,
            ..ValidationLimits::default()
        };
        assert!(!is_valid_trust_name_within("Kids", &limits));
        assert!(!is_valid_trust_name_within("Kids Fund", &limits));
        assert!(is_valid_trust_name_within("Kids_1", &limits));
    }

    #[test]
    fn amount_coercion() {
        assert!(is_valid_amount(&FieldValue::Number(0.5), 0.0));
        assert!(!is_valid_amount(&FieldValue::Number(0.0), 0.0));
        assert!(is_valid_amount(&FieldValue::Text("12.5 ETH"), 0.0));
        assert!(!is_valid_amount(&FieldValue::Text(""), 0.0));
        assert!(!is_valid_amount(&FieldValue::Text("abc"), 0.0));
        assert!(!is_valid_amount(&FieldValue::Number(f64::INFINITY), 0.0));
        assert!(!is_valid_amount(&FieldValue::Number(f64::NAN), 0.0));
        assert!(!is_valid_amount(&FieldValue::Missing, 0.0));
        assert!(!is_valid_amount(&FieldValue::Number(0.001), 0.001));
    }

    #[test]
    fn numeric_prefix_parsing() {
        assert_eq!(parse_numeric("  42"), Some(42.0));
        assert_eq!(parse_numeric("1e3x"), Some(1000.0));
        assert_eq!(parse_numeric("3.5.1"), Some(3.5));
        assert_eq!(parse_numeric("-"), None);
        assert_eq!(parse_numeric("nan"), None);
        assert_eq!(parse_numeric("inf"), None);
    }

    #[test]
    fn future_date() {
        let now = noon(2026, 10, 19);
        assert!(is_valid_future_date("2027-10-19", now));
        assert!(!is_valid_future_date("2026-10-18", now));
        assert!(!is_valid_future_date("2026-10-19", now));
        assert!(!is_valid_future_date("not a date", now));
    }
}
