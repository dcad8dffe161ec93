//! Label/value lines shown on the review step.

use serde::Serialize;

use worthy_types::{CreateTrustFormData, PayoutCurrency, TrustDuration};
use worthy_utils::{format_crypto, format_currency};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReviewLine {
    pub label: &'static str,
    pub value: String,
}

impl ReviewLine {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

const NOT_SET: &str = "Not set";

fn text_or_unset(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(NOT_SET)
        .to_string()
}

/// Summarise `form` for the review page. With `hidden`, amounts are masked.
pub fn review_summary(form: &CreateTrustFormData, hidden: bool) -> Vec<ReviewLine> {
    let settings = &form.settings;
    let mut lines = vec![
        ReviewLine::new("Trust name", text_or_unset(settings.trust_name.as_deref())),
        ReviewLine::new(
            "Purpose",
            text_or_unset(settings.purpose_statement.as_deref()),
        ),
    ];

    let duration = match (settings.duration, settings.end_date.as_deref()) {
        (Some(TrustDuration::Fixed), Some(end)) if !end.trim().is_empty() => {
            format!("Fixed, ends {}", end.trim())
        }
        (Some(TrustDuration::Fixed), _) => "Fixed".to_string(),
        (Some(TrustDuration::Perpetual), _) => "Perpetual".to_string(),
        (None, _) => NOT_SET.to_string(),
    };
    lines.push(ReviewLine::new("Duration", duration));
    lines.push(ReviewLine::new(
        "Beneficiary",
        text_or_unset(settings.beneficiary_address.as_deref()),
    ));

    if let Some(amount) = settings.payout_amount {
        let value = match settings.payout_currency {
            Some(PayoutCurrency::Usd) | None => format_currency(amount, hidden),
            Some(currency) => format_crypto(amount, currency.symbol(), hidden),
        };
        let value = match settings.payout_frequency {
            Some(freq) => format!("{value} {freq}"),
            None => value,
        };
        lines.push(ReviewLine::new("Payout", value));
    }

    let allocation: Vec<String> = settings
        .asset_targets
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter(|t| t.percentage > 0.0)
        .map(|t| format!("{} {:.1}%", t.symbol, t.percentage))
        .collect();
    lines.push(ReviewLine::new(
        "Allocation",
        if allocation.is_empty() {
            NOT_SET.to_string()
        } else {
            allocation.join(", ")
        },
    ));

    let quorum = form
        .governance
        .quorum_threshold
        .map_or_else(|| NOT_SET.to_string(), |q| q.to_string());
    lines.push(ReviewLine::new(
        "Trustees",
        format!("{} (quorum {quorum})", form.trustees.len()),
    ));
    if let Some(days) = form.governance.voting_period {
        lines.push(ReviewLine::new("Voting period", format!("{days} days")));
    }
    if let Some(days) = form.governance.execution_delay {
        lines.push(ReviewLine::new("Execution delay", format!("{days} days")));
    }

    let deposit = &form.deposit;
    if let Some(amount) = deposit.initial_deposit {
        let symbol = deposit.currency.map_or("USDC", |c| c.symbol());
        lines.push(ReviewLine::new(
            "Initial deposit",
            format_crypto(amount, symbol, hidden),
        ));
    }
    if deposit.recurring_deposits {
        let symbol = deposit.currency.map_or("USDC", |c| c.symbol());
        let amount = deposit
            .recurring_amount
            .map_or_else(|| NOT_SET.to_string(), |a| format_crypto(a, symbol, hidden));
        let value = match deposit.recurring_frequency {
            Some(freq) => format!("{amount} {freq}"),
            None => amount,
        };
        lines.push(ReviewLine::new("Recurring deposit", value));
    }

    lines
}
