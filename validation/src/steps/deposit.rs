use worthy_types::DepositSettings;

use super::{apply_rules, finish, TrustValidator};
use crate::field::{FieldId, Report, StepKind, StepValidation};
use crate::format::is_valid_amount;
use crate::rules::{FieldValue, Rule};

impl TrustValidator {
    /// Validate initial funding and, when enabled, recurring deposits.
    pub fn validate_deposit_step(&self, deposit: &DepositSettings) -> StepValidation {
        let limits = self.limits();
        let mut report = Report::default();

        let min = limits.min_initial_deposit;
        let initial_rules = [
            Rule::required_nonzero("Initial deposit is required"),
            Rule::custom(
                move |v| v.as_number().is_some_and(|n| n.is_finite() && n >= min),
                format!("Initial deposit must be at least {min}"),
            ),
        ];
        apply_rules(
            &mut report,
            FieldId::InitialDeposit,
            FieldValue::number(deposit.initial_deposit),
            &initial_rules,
        );

        if deposit.recurring_deposits {
            let amount_rules = [
                Rule::required_nonzero(
                    "Recurring amount is required when recurring deposits are enabled",
                ),
                Rule::custom(
                    |v| is_valid_amount(v, 0.0),
                    "Recurring amount must be greater than 0",
                ),
            ];
            apply_rules(
                &mut report,
                FieldId::RecurringAmount,
                FieldValue::number(deposit.recurring_amount),
                &amount_rules,
            );
            if deposit.recurring_frequency.is_none() {
                report.error(
                    FieldId::RecurringFrequency,
                    "Recurring frequency is required when recurring deposits are enabled",
                );
            }
        }

        if let Some(amount) = deposit.initial_deposit {
            if amount > 0.0 && amount < limits.small_deposit_warning {
                report.warning("Very small initial deposit may not be practical for gas costs");
            }
        }

        finish(StepKind::Deposit, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::validate_deposit_step;
    use worthy_types::PayoutFrequency;

    fn deposit(amount: f64) -> DepositSettings {
        DepositSettings {
            initial_deposit: Some(amount),
            ..Default::default()
        }
    }

    #[test]
    fn plain_deposit_passes() {
        let v = validate_deposit_step(&deposit(1.5));
        assert!(v.is_valid);
        assert!(v.warnings.is_empty());
    }

    #[test]
    fn minimum_is_inclusive() {
        let v = validate_deposit_step(&deposit(0.001));
        assert!(v.is_valid, "unexpected errors: {:?}", v.errors);
        assert_eq!(
            v.warnings,
            vec!["Very small initial deposit may not be practical for gas costs"]
        );

        let v = validate_deposit_step(&deposit(0.0005));
        assert_eq!(
            v.error_for(FieldId::InitialDeposit),
            Some("Initial deposit must be at least 0.001")
        );
    }

    #[test]
    fn zero_or_missing_deposit_is_required() {
        for d in [deposit(0.0), DepositSettings::default()] {
            let v = validate_deposit_step(&d);
            assert_eq!(
                v.errors_for(FieldId::InitialDeposit),
                vec!["Initial deposit is required"]
            );
        }
    }

    #[test]
    fn recurring_fields_checked_only_when_enabled() {
        let mut d = deposit(1.0);
        d.recurring_amount = Some(-1.0);
        assert!(validate_deposit_step(&d).is_valid);

        d.recurring_deposits = true;
        let v = validate_deposit_step(&d);
        assert!(v.has_error("Recurring amount must be greater than 0"));
        assert!(v.has_error(
            "Recurring frequency is required when recurring deposits are enabled"
        ));

        d.recurring_amount = Some(0.5);
        d.recurring_frequency = Some(PayoutFrequency::Monthly);
        assert!(validate_deposit_step(&d).is_valid);
    }

    #[test]
    fn recurring_without_amount() {
        let d = DepositSettings {
            initial_deposit: Some(1.0),
            recurring_deposits: true,
            recurring_frequency: Some(PayoutFrequency::Quarterly),
            ..Default::default()
        };
        let v = validate_deposit_step(&d);
        assert_eq!(
            v.errors_for(FieldId::RecurringAmount),
            vec!["Recurring amount is required when recurring deposits are enabled"]
        );
    }
}
