use chrono::NaiveDateTime;

use worthy_types::address::normalize;
use worthy_types::{TrustDuration, TrustSettings};

use super::{apply_rules, finish, TrustValidator};
use crate::config::ValidationLimits;
use crate::field::{FieldId, Report, StepKind, StepValidation};
use crate::format::{
    is_valid_amount, is_valid_ethereum_address, is_valid_future_date, TRUST_NAME_PATTERN,
};
use crate::rules::{FieldValue, Rule};

fn address_rules(label: &'static str) -> Vec<Rule> {
    vec![
        Rule::required(format!("{label} address is required")),
        Rule::custom(
            |v| matches!(v, FieldValue::Text(t) if is_valid_ethereum_address(t)),
            format!("Invalid {label} Ethereum address format"),
        ),
    ]
}

fn rule_table(limits: &ValidationLimits) -> Vec<(FieldId, Vec<Rule>)> {
    vec![
        (
            FieldId::TrustName,
            vec![
                Rule::required("Trust name is required"),
                Rule::min_length(
                    limits.trust_name_min_len,
                    format!(
                        "Trust name must be at least {} characters",
                        limits.trust_name_min_len
                    ),
                ),
                Rule::max_length(
                    limits.trust_name_max_len,
                    format!(
                        "Trust name must be less than {} characters",
                        limits.trust_name_max_len
                    ),
                ),
                Rule::pattern(
                    &TRUST_NAME_PATTERN,
                    "Trust name contains invalid characters",
                ),
            ],
        ),
        (
            FieldId::PurposeStatement,
            vec![
                Rule::required("Purpose statement is required"),
                Rule::min_length(
                    limits.purpose_min_len,
                    format!(
                        "Purpose statement must be at least {} characters",
                        limits.purpose_min_len
                    ),
                ),
                Rule::max_length(
                    limits.purpose_max_len,
                    format!(
                        "Purpose statement must be less than {} characters",
                        limits.purpose_max_len
                    ),
                ),
            ],
        ),
        (FieldId::BeneficiaryAddress, address_rules("Beneficiary")),
        (FieldId::CreatorAddress, address_rules("Creator")),
        (
            FieldId::PayoutAmount,
            vec![
                Rule::required_nonzero("Payout amount is required"),
                Rule::custom(
                    |v| is_valid_amount(v, 0.0),
                    "Payout amount must be greater than 0",
                ),
            ],
        ),
        (
            FieldId::PayoutFrequency,
            vec![Rule::required("Payout frequency is required")],
        ),
        (
            FieldId::PayoutCurrency,
            vec![Rule::required("Payout currency is required")],
        ),
        (
            FieldId::PayoutMethod,
            vec![Rule::required("Payout method is required")],
        ),
    ]
}

fn field_value(settings: &TrustSettings, field: FieldId) -> FieldValue<'_> {
    match field {
        FieldId::TrustName => FieldValue::text(settings.trust_name.as_deref()),
        FieldId::PurposeStatement => FieldValue::text(settings.purpose_statement.as_deref()),
        FieldId::BeneficiaryAddress => FieldValue::text(settings.beneficiary_address.as_deref()),
        FieldId::CreatorAddress => FieldValue::text(settings.creator_address.as_deref()),
        FieldId::PayoutAmount => FieldValue::number(settings.payout_amount),
        FieldId::PayoutFrequency => FieldValue::text(settings.payout_frequency.map(|f| f.as_str())),
        FieldId::PayoutCurrency => FieldValue::text(settings.payout_currency.map(|c| c.symbol())),
        FieldId::PayoutMethod => FieldValue::text(settings.payout_method.map(|m| m.as_str())),
        FieldId::EndDate => FieldValue::text(settings.end_date.as_deref()),
        _ => FieldValue::Missing,
    }
}

/// Percent value as shown to the user: at most two decimals, no trailing zeros.
fn display_percent(value: f64) -> String {
    // `+ 0.0` maps -0.0 to 0.0.
    let rounded = (value * 100.0).round() / 100.0 + 0.0;
    format!("{rounded}")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

impl TrustValidator {
    /// Validate the settings step against the clock reading `now`.
    pub fn validate_settings_step(
        &self,
        settings: &TrustSettings,
        now: NaiveDateTime,
    ) -> StepValidation {
        let limits = self.limits();
        let mut report = Report::default();

        for (field, rules) in rule_table(limits) {
            apply_rules(&mut report, field, field_value(settings, field), &rules);
        }

        if settings.duration == Some(TrustDuration::Fixed) {
            let end_rules = [Rule::custom(
                move |v| matches!(v, FieldValue::Text(t) if is_valid_future_date(t, now)),
                "End date must be in the future",
            )];
            apply_rules(
                &mut report,
                FieldId::EndDate,
                field_value(settings, FieldId::EndDate),
                &end_rules,
            );
            if non_blank(settings.end_date.as_deref()).is_none() {
                report.error(
                    FieldId::EndDate,
                    "End date is required for fixed duration trusts",
                );
            }
        }

        if let Some(annual) = settings.annual_distribution() {
            if annual > limits.large_annual_distribution {
                report.warning("High annual distribution amount detected");
            }
        }

        let total = settings.total_allocation();
        if (total - 100.0).abs() > limits.allocation_tolerance {
            report.error(
                FieldId::AssetTargets,
                format!(
                    "Total allocation must be exactly 100%, but it is currently {}%.",
                    display_percent(total)
                ),
            );
        }

        if let Some(first) = settings.first_payment_date {
            match first.is_before_month_of(now) {
                Ok(false) => {}
                Ok(true) => report.error(
                    FieldId::FirstPaymentDate,
                    "The first payment date cannot be in the past.",
                ),
                Err(_) => report.error(
                    FieldId::FirstPaymentDate,
                    "The first payment date is not a valid month.",
                ),
            }
        }

        if let (Some(creator), Some(beneficiary)) = (
            non_blank(settings.creator_address.as_deref()),
            non_blank(settings.beneficiary_address.as_deref()),
        ) {
            if normalize(creator) == normalize(beneficiary) {
                report.error(
                    FieldId::BeneficiaryAddress,
                    "Creator and Beneficiary addresses cannot be the same.",
                );
            }
        }

        if let (Some(quorum), Some(trustees)) =
            (settings.quorum_required, settings.number_of_trustees)
        {
            if quorum > 0 && trustees > 0 && quorum > trustees {
                report.error(
                    FieldId::QuorumRequired,
                    "Quorum required cannot be greater than the number of trustees.",
                );
            }
        }

        finish(StepKind::Settings, report)
    }
}
