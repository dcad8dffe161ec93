use worthy_types::GovernanceSettings;

use super::{apply_rules, finish, TrustValidator};
use crate::field::{FieldId, Report, StepKind, StepValidation};
use crate::rules::{FieldValue, Rule};

fn in_days(v: &FieldValue<'_>, min: u32, max: u32) -> bool {
    v.as_number()
        .is_some_and(|n| n >= f64::from(min) && n <= f64::from(max))
}

impl TrustValidator {
    /// Validate governance parameters against the current trustee count.
    pub fn validate_governance_step(
        &self,
        governance: &GovernanceSettings,
        trustee_count: usize,
    ) -> StepValidation {
        let limits = self.limits();
        let mut report = Report::default();

        let quorum_rules = [
            Rule::required_nonzero("Quorum threshold is required"),
            Rule::custom(
                |v| v.as_number().is_some_and(|n| n >= 1.0),
                "Quorum must be at least 1",
            ),
        ];
        apply_rules(
            &mut report,
            FieldId::QuorumThreshold,
            FieldValue::count(governance.quorum_threshold),
            &quorum_rules,
        );

        let (vmin, vmax) = (limits.min_voting_period, limits.max_voting_period);
        let voting_rules = [
            Rule::required_nonzero("Voting period is required"),
            Rule::custom(
                move |v| in_days(v, vmin, vmax),
                format!("Voting period must be between {vmin}-{vmax} days"),
            ),
        ];
        apply_rules(
            &mut report,
            FieldId::VotingPeriod,
            FieldValue::count(governance.voting_period),
            &voting_rules,
        );

        // Zero is a legal delay.
        let (dmin, dmax) = (limits.min_execution_delay, limits.max_execution_delay);
        let delay_rules = [
            Rule::required("Execution delay is required"),
            Rule::custom(
                move |v| in_days(v, dmin, dmax),
                format!("Execution delay must be between {dmin}-{dmax} days"),
            ),
        ];
        apply_rules(
            &mut report,
            FieldId::ExecutionDelay,
            FieldValue::count(governance.execution_delay),
            &delay_rules,
        );

        if let Some(quorum) = governance.quorum_threshold {
            if quorum as usize > trustee_count {
                report.error(
                    FieldId::QuorumThreshold,
                    "Quorum threshold cannot exceed number of trustees",
                );
            }
        }
        if let Some(threshold) = governance.proposal_threshold {
            if threshold as usize > trustee_count {
                report.error(
                    FieldId::ProposalThreshold,
                    "Proposal threshold cannot exceed number of trustees",
                );
            }
        }

        if let Some(period) = governance.voting_period {
            if period > 0 && period < limits.short_voting_period_warning {
                report.warning("Short voting period may not give trustees enough time to review");
            }
        }
        if governance.execution_delay == Some(0) {
            report.warning("No execution delay reduces time for emergency intervention");
        }

        finish(StepKind::Governance, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::validate_governance_step;

    fn settings(quorum: u32, voting: u32, delay: u32, proposal: u32) -> GovernanceSettings {
        GovernanceSettings {
            quorum_threshold: Some(quorum),
            voting_period: Some(voting),
            execution_delay: Some(delay),
            proposal_threshold: Some(proposal),
        }
    }

    #[test]
    fn defaults_pass_with_enough_trustees() {
        let v = validate_governance_step(&settings(2, 7, 1, 1), 3);
        assert!(v.is_valid, "unexpected errors: {:?}", v.errors);
        assert!(v.warnings.is_empty());
    }

    #[test]
    fn quorum_above_trustee_count() {
        let v = validate_governance_step(&settings(3, 7, 1, 1), 2);
        assert_eq!(
            v.error_for(FieldId::QuorumThreshold),
            Some("Quorum threshold cannot exceed number of trustees")
        );
    }

    #[test]
    fn zero_quorum_is_missing() {
        let v = validate_governance_step(&settings(0, 7, 1, 1), 3);
        assert_eq!(
            v.errors_for(FieldId::QuorumThreshold),
            vec!["Quorum threshold is required"]
        );
    }

    #[test]
    fn voting_period_out_of_range() {
        let v = validate_governance_step(&settings(1, 31, 1, 1), 3);
        assert!(v.has_error("Voting period must be between 1-30 days"));
    }

    #[test]
    fn execution_delay_bounds_and_zero_warning() {
        let v = validate_governance_step(&settings(1, 7, 8, 1), 3);
        assert!(v.has_error("Execution delay must be between 0-7 days"));

        let v = validate_governance_step(&settings(1, 7, 0, 1), 3);
        assert!(v.is_valid);
        assert_eq!(
            v.warnings,
            vec!["No execution delay reduces time for emergency intervention"]
        );
    }

    #[test]
    fn short_voting_period_warns() {
        let v = validate_governance_step(&settings(1, 2, 1, 1), 3);
        assert!(v.is_valid);
        assert_eq!(
            v.warnings,
            vec!["Short voting period may not give trustees enough time to review"]
        );
    }

    #[test]
    fn proposal_threshold_above_trustee_count() {
        let v = validate_governance_step(&settings(1, 7, 1, 4), 3);
        assert_eq!(
            v.error_for(FieldId::ProposalThreshold),
            Some("Proposal threshold cannot exceed number of trustees")
        );
    }

    #[test]
    fn unset_fields_are_required() {
        let v = validate_governance_step(&GovernanceSettings::default(), 3);
        assert!(v.has_error("Quorum threshold is required"));
        assert!(v.has_error("Voting period is required"));
        assert!(v.has_error("Execution delay is required"));
        assert!(v.warnings.is_empty());
    }
}
