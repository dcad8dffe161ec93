//! Balance formatting with optional masking for the "hide balances" toggle.

use serde::{Deserialize, Serialize};

/// What kind of figure is being masked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceKind {
    #[default]
    Currency,
    Crypto,
    Percentage,
}

/// Placeholder shown instead of a hidden figure.
pub fn hide_balance(kind: BalanceKind) -> &'static str {
    match kind {
        BalanceKind::Currency => "••••••••",
        BalanceKind::Crypto => "••••••",
        BalanceKind::Percentage => "••••%",
    }
}

/// `1234567.891` with 2 decimals -> `1,234,567.89`. The sign is dropped when
/// the rounded value is zero.
fn grouped(amount: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let nonzero = fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    if amount.is_sign_negative() && nonzero {
        out.push('-');
    }
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// US-dollar amount with two decimals, e.g. `$1,234.56` or `-$12.00`.
pub fn format_currency(amount: f64, hidden: bool) -> String {
    if hidden {
        return hide_balance(BalanceKind::Currency).to_string();
    }
    let body = grouped(amount, 2);
    match body.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${body}"),
    }
}

/// Token amount followed by its symbol. Stablecoins get two decimals,
/// everything else four.
pub fn format_crypto(amount: f64, symbol: &str, hidden: bool) -> String {
    if hidden {
        return format!("{} {symbol}", hide_balance(BalanceKind::Crypto));
    }
    let decimals = if matches!(symbol, "USDC" | "USDT") { 2 } else { 4 };
    format!("{} {symbol}", grouped(amount, decimals))
}

/// Signed change with one decimal: `+2.5%`, `-1.0%`, `0.0%`.
pub fn format_percentage(percentage: f64, hidden: bool) -> String {
    if hidden {
        return hide_balance(BalanceKind::Percentage).to_string();
    }
    let sign = if percentage > 0.0 { "+" } else { "" };
    format!("{sign}{percentage:.1}%")
}
