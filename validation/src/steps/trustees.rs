use std::collections::HashSet;

use worthy_types::address::normalize;
use worthy_types::{GovernanceSettings, Trustee};

use super::{apply_rules, finish, TrustValidator};
use crate::field::{FieldId, Report, StepKind, StepValidation};
use crate::format::{is_valid_email, is_valid_ethereum_address};
use crate::rules::{FieldValue, Rule};

impl TrustValidator {
    /// Validate the trustee list. `governance` supplies the quorum threshold
    /// checked against the list length.
    pub fn validate_trustees_step(
        &self,
        trustees: &[Trustee],
        governance: &GovernanceSettings,
    ) -> StepValidation {
        let limits = self.limits();
        let mut report = Report::default();

        let (min, max) = (limits.min_trustees, limits.max_trustees);
        let count_rules = [
            Rule::custom(
                move |v| matches!(v, FieldValue::Items(n) if *n >= min),
                format!("Minimum of {min} trustee required"),
            ),
            Rule::custom(
                move |v| matches!(v, FieldValue::Items(n) if *n <= max),
                format!("Maximum of {max} trustees allowed"),
            ),
        ];
        apply_rules(
            &mut report,
            FieldId::Trustees,
            FieldValue::Items(trustees.len()),
            &count_rules,
        );

        for (index, trustee) in trustees.iter().enumerate() {
            let n = index + 1;
            if !is_valid_ethereum_address(&trustee.address) {
                report.error(
                    FieldId::TrusteeAddress(index),
                    format!("Trustee {n}: Invalid Ethereum address"),
                );
            }
            if let Some(email) = trustee.email.as_deref().filter(|e| !e.is_empty()) {
                if !is_valid_email(email) {
                    report.error(
                        FieldId::TrusteeEmail(index),
                        format!("Trustee {n}: Invalid email address"),
                    );
                }
            }
            let name_len = trustee
                .name
                .as_deref()
                .map_or(0, |name| name.trim().chars().count());
            if name_len < limits.min_trustee_name_len {
                report.error(
                    FieldId::TrusteeName(index),
                    format!(
                        "Trustee {n}: Name is required (minimum {} characters)",
                        limits.min_trustee_name_len
                    ),
                );
            }
        }

        let mut seen = HashSet::new();
        let duplicated = trustees
            .iter()
            .filter(|t| !t.address.trim().is_empty())
            .any(|t| !seen.insert(normalize(&t.address)));
        if duplicated {
            report.error(
                FieldId::Trustees,
                "Duplicate trustee addresses are not allowed",
            );
        }

        if let Some(quorum) = governance.quorum_threshold {
            if quorum as usize > trustees.len() {
                report.error(
                    FieldId::QuorumThreshold,
                    "Quorum threshold cannot exceed number of trustees",
                );
            }
        }

        match trustees.len() {
            1 => report.warning("Single trustee setup reduces decentralization benefits"),
            n if n > limits.many_trustees_warning => {
                report.warning("Large number of trustees may slow down governance decisions")
            }
            _ => {}
        }

        finish(StepKind::Trustees, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::validate_trustees_step;

    fn addr(c: char) -> String {
        format!("0x{}", c.to_string().repeat(40))
    }

    fn trustee(n: u32, c: char) -> Trustee {
        Trustee::new(n.to_string(), addr(c)).with_name(format!("Trustee {n}"))
    }

    fn governance(quorum: u32) -> GovernanceSettings {
        GovernanceSettings {
            quorum_threshold: Some(quorum),
            voting_period: Some(7),
            execution_delay: Some(1),
            proposal_threshold: Some(1),
        }
    }

    #[test]
    fn three_distinct_trustees_pass() {
        let list = vec![trustee(1, 'a'), trustee(2, 'b'), trustee(3, 'c')];
        let v = validate_trustees_step(&list, &governance(2));
        assert!(v.is_valid, "unexpected errors: {:?}", v.errors);
        assert!(v.warnings.is_empty());
    }

    #[test]
    fn empty_list_needs_a_trustee() {
        let v = validate_trustees_step(&[], &GovernanceSettings::default());
        assert_eq!(
            v.errors_for(FieldId::Trustees),
            vec!["Minimum of 1 trustee required"]
        );
    }

    #[test]
    fn more_than_ten_rejected() {
        let letters = "abcdef0123456";
        let list: Vec<Trustee> = letters
            .chars()
            .take(11)
            .enumerate()
            .map(|(i, c)| trustee(i as u32 + 1, c))
            .collect();
        let v = validate_trustees_step(&list, &governance(2));
        assert!(v.has_error("Maximum of 10 trustees allowed"));
        assert!(v
            .warnings
            .contains(&"Large number of trustees may slow down governance decisions".to_string()));
    }

    #[test]
    fn duplicate_addresses_ignore_case() {
        let a = trustee(1, 'a');
        let mut b = trustee(2, 'b');
        b.set_address(addr('A'));
        let v = validate_trustees_step(&[a, b], &governance(1));
        assert!(v.has_error("Duplicate trustee addresses are not allowed"));
    }

    #[test]
    fn per_trustee_errors_are_numbered() {
        let good = trustee(1, 'a');
        let bad = Trustee::new("2", "0x1234").with_email("not-an-email");
        let v = validate_trustees_step(&[good, bad], &governance(1));
        assert_eq!(
            v.error_for(FieldId::TrusteeAddress(1)),
            Some("Trustee 2: Invalid Ethereum address")
        );
        assert_eq!(
            v.error_for(FieldId::TrusteeEmail(1)),
            Some("Trustee 2: Invalid email address")
        );
        assert_eq!(
            v.error_for(FieldId::TrusteeName(1)),
            Some("Trustee 2: Name is required (minimum 2 characters)")
        );
        assert_eq!(v.error_for(FieldId::TrusteeAddress(0)), None);
    }

    #[test]
    fn blank_addresses_are_not_duplicates_of_each_other() {
        let a = Trustee::new("1", "").with_name("Ann");
        let b = Trustee::new("2", "").with_name("Ben");
        let v = validate_trustees_step(&[a, b], &governance(1));
        assert!(!v.has_error("Duplicate trustee addresses are not allowed"));
        assert_eq!(v.errors_for(FieldId::TrusteeAddress(0)).len(), 1);
    }

    #[test]
    fn quorum_above_list_length() {
        let list = vec![trustee(1, 'a'), trustee(2, 'b')];
        let v = validate_trustees_step(&list, &governance(3));
        assert!(v.has_error("Quorum threshold cannot exceed number of trustees"));
    }

    #[test]
    fn single_trustee_warns() {
        let v = validate_trustees_step(&[trustee(1, 'a')], &governance(1));
        assert!(v.is_valid);
        assert_eq!(
            v.warnings,
            vec!["Single trustee setup reduces decentralization benefits"]
        );
    }
}
