//! Declarative per-field rules and the routine that evaluates them.
//!
//! A field owns an ordered list of [`Rule`]s. [`validate_field`] walks the list
//! once: an empty value only answers to `Required` rules, a present value is
//! checked against every other rule and each failure contributes its message.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::format::parse_numeric;

/// A form value as seen by the rule engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    /// The field was never set.
    Missing,
    Text(&'a str),
    Number(f64),
    /// Length of a list field. Lists are never empty in the `Required` sense;
    /// count bounds are expressed with `Custom` rules.
    Items(usize),
}

impl<'a> FieldValue<'a> {
    pub fn text(value: Option<&'a str>) -> Self {
        value.map_or(Self::Missing, Self::Text)
    }

    pub fn number(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Number)
    }

    pub fn count(value: Option<u32>) -> Self {
        value.map_or(Self::Missing, |n| Self::Number(f64::from(n)))
    }

    /// Unset, or text that is empty after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Text(t) => t.trim().is_empty(),
            _ => false,
        }
    }

    /// Numeric zero (or NaN).
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Number(n) if *n == 0.0 || n.is_nan())
    }

    /// Numeric view of the value; text is parsed leniently.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(t) => parse_numeric(t),
            _ => None,
        }
    }
}

/// Predicate over a field value.
pub type Check = Arc<dyn Fn(&FieldValue<'_>) -> bool + Send + Sync>;

#[derive(Clone)]
pub enum RuleKind {
    /// The field must be present. With `zero_is_empty`, numeric zero counts as
    /// absent as well.
    Required { zero_is_empty: bool },
    MinLength(usize),
    MaxLength(usize),
    /// Regular expression the whole text value must match.
    Pattern(Regex),
    Custom(Check),
}

impl fmt::Debug for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { zero_is_empty } => f
                .debug_struct("Required")
                .field("zero_is_empty", zero_is_empty)
                .finish(),
            Self::MinLength(n) => f.debug_tuple("MinLength").field(n).finish(),
            Self::MaxLength(n) => f.debug_tuple("MaxLength").field(n).finish(),
            Self::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A single rule plus the message shown when it fails.
#[derive(Clone, Debug)]
pub struct Rule {
    pub kind: RuleKind,
    pub message: Cow<'static, str>,
}

impl Rule {
    pub fn required(message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_kind(RuleKind::Required { zero_is_empty: false }, message)
    }

    /// Like [`Rule::required`], but a numeric zero is also "not provided".
    pub fn required_nonzero(message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_kind(RuleKind::Required { zero_is_empty: true }, message)
    }

    pub fn min_length(min: usize, message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_kind(RuleKind::MinLength(min), message)
    }

    pub fn max_length(max: usize, message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_kind(RuleKind::MaxLength(max), message)
    }

    pub fn pattern(pattern: &Regex, message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_kind(RuleKind::Pattern(pattern.clone()), message)
    }

    pub fn custom<F>(check: F, message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&FieldValue<'_>) -> bool + Send + Sync + 'static,
    {
        Self::with_kind(RuleKind::Custom(Arc::new(check)), message)
    }

    fn with_kind(kind: RuleKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn is_required(&self) -> bool {
        matches!(self.kind, RuleKind::Required { .. })
    }

    fn treats_zero_as_empty(&self) -> bool {
        matches!(self.kind, RuleKind::Required { zero_is_empty: true })
    }

    /// Whether a present value satisfies this rule.
    fn accepts(&self, value: &FieldValue<'_>) -> bool {
        match (&self.kind, value) {
            (RuleKind::Required { .. }, _) => true,
            (RuleKind::MinLength(min), FieldValue::Text(t)) => t.chars().count() >= *min,
            (RuleKind::MaxLength(max), FieldValue::Text(t)) => t.chars().count() <= *max,
            (RuleKind::Pattern(re), FieldValue::Text(t)) => re.is_match(t),
            (RuleKind::MinLength(_) | RuleKind::MaxLength(_) | RuleKind::Pattern(_), _) => true,
            (RuleKind::Custom(check), v) => check(v),
        }
    }
}

/// Evaluate `rules` against `value`, returning failure messages in rule order.
pub fn validate_field(field: &str, value: &FieldValue<'_>, rules: &[Rule]) -> Vec<String> {
    let empty =
        value.is_blank() || (value.is_zero() && rules.iter().any(Rule::treats_zero_as_empty));

    let errors: Vec<String> = if empty {
        rules
            .iter()
            .filter(|r| r.is_required())
            .map(|r| r.message.to_string())
            .collect()
    } else {
        rules
            .iter()
            .filter(|r| !r.accepts(value))
            .map(|r| r.message.to_string())
            .collect()
    };

    if !errors.is_empty() {
        tracing::trace!(field, count = errors.len(), "field rules failed");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::TRUST_NAME_PATTERN;

    fn name_rules() -> Vec<Rule> {
        vec![
            Rule::required("Trust name is required"),
            Rule::min_length(3, "Trust name must be at least 3 characters"),
            Rule::max_length(100, "Trust name must be less than 100 characters"),
            Rule::pattern(&TRUST_NAME_PATTERN, "Trust name contains invalid characters"),
        ]
    }

    #[test]
    fn missing_required_reports_only_required() {
        let errors = validate_field("trustName", &FieldValue::Missing, &name_rules());
        assert_eq!(errors, vec!["Trust name is required"]);
        let errors = validate_field("trustName", &FieldValue::Text("   "), &name_rules());
        assert_eq!(errors, vec!["Trust name is required"]);
    }

    #[test]
    fn multiple_failures_kept_in_rule_order() {
        let errors = validate_field("trustName", &FieldValue::Text("a#"), &name_rules());
        assert_eq!(
            errors,
            vec![
                "Trust name must be at least 3 characters",
                "Trust name contains invalid characters"
            ]
        );
    }

    #[test]
    fn empty_optional_field_skips_rules() {
        let rules = vec![Rule::custom(|_| false, "never")];
        assert!(validate_field("endDate", &FieldValue::Missing, &rules).is_empty());
        assert!(validate_field("endDate", &FieldValue::Text(""), &rules).is_empty());
        assert_eq!(
            validate_field("endDate", &FieldValue::Text("x"), &rules),
            vec!["never"]
        );
    }

    #[test]
    fn zero_handling_is_explicit() {
        let nonzero = vec![
            Rule::required_nonzero("Payout amount is required"),
            Rule::custom(|v| v.as_number().is_some_and(|n| n > 0.0), "must be > 0"),
        ];
        assert_eq!(
            validate_field("payoutAmount", &FieldValue::Number(0.0), &nonzero),
            vec!["Payout amount is required"]
        );

        let zero_ok = vec![
            Rule::required("Execution delay is required"),
            Rule::custom(
                |v| v.as_number().is_some_and(|n| (0.0..=7.0).contains(&n)),
                "Execution delay must be between 0-7 days",
            ),
        ];
        assert!(validate_field("executionDelay", &FieldValue::Number(0.0), &zero_ok).is_empty());
        assert_eq!(
            validate_field("executionDelay", &FieldValue::Missing, &zero_ok),
            vec!["Execution delay is required"]
        );
    }

    #[test]
    fn pattern_rule_matches_whole_value() {
        let rules = vec![Rule::pattern(&TRUST_NAME_PATTERN, "bad")];
        assert!(validate_field("trustName", &FieldValue::Text("O'Neil Trust"), &rules).is_empty());
        assert_eq!(
            validate_field("trustName", &FieldValue::Text("Trust!"), &rules),
            vec!["bad"]
        );
        assert!(format!("{:?}", rules[0].kind).starts_with("Pattern("));
    }

    #[test]
    fn length_rules_ignore_non_text() {
        let rules = vec![Rule::min_length(3, "short")];
        assert!(validate_field("n", &FieldValue::Number(1.0), &rules).is_empty());
    }

    #[test]
    fn item_lists_are_never_blank() {
        let rules = vec![
            Rule::required("At least one trustee is required"),
            Rule::custom(
                |v| matches!(v, FieldValue::Items(n) if *n >= 1),
                "Minimum of 1 trustee required",
            ),
        ];
        assert_eq!(
            validate_field("trustees", &FieldValue::Items(0), &rules),
            vec!["Minimum of 1 trustee required"]
        );
    }
}
