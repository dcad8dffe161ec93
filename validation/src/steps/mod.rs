//! Step validators: one per wizard section.
//!
//! Each validator evaluates its section's rule table, then layers cross-field
//! checks on top. Validators never fail; every outcome is data in the
//! returned [`StepValidation`].

mod deposit;
mod governance;
mod settings;
mod trustees;

use chrono::NaiveDateTime;
use std::collections::BTreeMap;

use worthy_types::{DepositSettings, GovernanceSettings, Trustee, TrustSettings};

use crate::config::ValidationLimits;
use crate::field::{FieldId, Report, StepKind, StepValidation};
use crate::rules::{validate_field, FieldValue, Rule};

/// Step validators bound to a set of [`ValidationLimits`].
#[derive(Clone, Debug, Default)]
pub struct TrustValidator {
    limits: ValidationLimits,
}

impl TrustValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Run all four validators independently; no step short-circuits another.
    pub fn validate_all_steps(
        &self,
        settings: &TrustSettings,
        trustees: &[Trustee],
        governance: &GovernanceSettings,
        deposit: &DepositSettings,
        now: NaiveDateTime,
    ) -> BTreeMap<StepKind, StepValidation> {
        let mut results = BTreeMap::new();
        results.insert(StepKind::Settings, self.validate_settings_step(settings, now));
        results.insert(
            StepKind::Trustees,
            self.validate_trustees_step(trustees, governance),
        );
        results.insert(
            StepKind::Governance,
            self.validate_governance_step(governance, trustees.len()),
        );
        results.insert(StepKind::Deposit, self.validate_deposit_step(deposit));
        results
    }
}

/// Evaluate one field's rules and record failures against `field`.
fn apply_rules(report: &mut Report, field: FieldId, value: FieldValue<'_>, rules: &[Rule]) {
    report.errors(field, validate_field(field.name(), &value, rules));
}

fn finish(step: StepKind, report: Report) -> StepValidation {
    let validation = report.finish();
    tracing::debug!(
        step = %step,
        errors = validation.errors.len(),
        warnings = validation.warnings.len(),
        "step validated"
    );
    validation
}

/// Settings validation with default limits.
pub fn validate_settings_step(settings: &TrustSettings, now: NaiveDateTime) -> StepValidation {
    TrustValidator::default().validate_settings_step(settings, now)
}

/// Trustee list validation with default limits.
pub fn validate_trustees_step(
    trustees: &[Trustee],
    governance: &GovernanceSettings,
) -> StepValidation {
    TrustValidator::default().validate_trustees_step(trustees, governance)
}

/// Governance validation with default limits.
pub fn validate_governance_step(
    governance: &GovernanceSettings,
    trustee_count: usize,
) -> StepValidation {
    TrustValidator::default().validate_governance_step(governance, trustee_count)
}

/// Deposit validation with default limits.
pub fn validate_deposit_step(deposit: &DepositSettings) -> StepValidation {
    TrustValidator::default().validate_deposit_step(deposit)
}

/// All four validators with default limits.
pub fn validate_all_steps(
    settings: &TrustSettings,
    trustees: &[Trustee],
    governance: &GovernanceSettings,
    deposit: &DepositSettings,
    now: NaiveDateTime,
) -> BTreeMap<StepKind, StepValidation> {
    TrustValidator::default().validate_all_steps(settings, trustees, governance, deposit, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn all_steps_reported_even_when_everything_fails() {
        let results = validate_all_steps(
            &TrustSettings::default(),
            &[],
            &GovernanceSettings::default(),
            &DepositSettings::default(),
            now(),
        );
        assert_eq!(results.len(), 4);
        for kind in StepKind::ALL {
            assert!(!results[&kind].is_valid, "{kind} should be invalid");
        }
    }

    #[test]
    fn custom_limits_flow_through() {
        let limits = ValidationLimits {
            max_trustees: 1,
            ..Default::default()
        };
        let validator = TrustValidator::new(limits);
        let trustees = vec![
            Trustee::new("1", format!("0x{}", "1".repeat(40))).with_name("Ann"),
            Trustee::new("2", format!("0x{}", "2".repeat(40))).with_name("Ben"),
        ];
        let v = validator.validate_trustees_step(&trustees, &GovernanceSettings::default());
        assert!(v.has_error("Maximum of 1 trustees allowed"));
    }
}
