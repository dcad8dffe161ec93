//! Validation results and the identifiers that route them to inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the input an error belongs to.
///
/// Trustee variants carry the trustee's position in the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "field", content = "index")]
pub enum FieldId {
    TrustName,
    PurposeStatement,
    EndDate,
    BeneficiaryAddress,
    CreatorAddress,
    PayoutAmount,
    PayoutFrequency,
    PayoutCurrency,
    PayoutMethod,
    FirstPaymentDate,
    AssetTargets,
    QuorumRequired,
    Trustees,
    TrusteeAddress(usize),
    TrusteeEmail(usize),
    TrusteeName(usize),
    QuorumThreshold,
    VotingPeriod,
    ExecutionDelay,
    ProposalThreshold,
    InitialDeposit,
    RecurringAmount,
    RecurringFrequency,
}

impl FieldId {
    /// Name of the form field (trustee variants share their list field).
    pub fn name(&self) -> &'static str {
        match self {
            Self::TrustName => "trustName",
            Self::PurposeStatement => "purposeStatement",
            Self::EndDate => "endDate",
            Self::BeneficiaryAddress => "beneficiaryAddress",
            Self::CreatorAddress => "creatorAddress",
            Self::PayoutAmount => "payoutAmount",
            Self::PayoutFrequency => "payoutFrequency",
            Self::PayoutCurrency => "payoutCurrency",
            Self::PayoutMethod => "payoutMethod",
            Self::FirstPaymentDate => "firstPaymentDate",
            Self::AssetTargets => "assetTargets",
            Self::QuorumRequired => "quorumRequired",
            Self::Trustees => "trustees",
            Self::TrusteeAddress(_) => "trustees.address",
            Self::TrusteeEmail(_) => "trustees.email",
            Self::TrusteeName(_) => "trustees.name",
            Self::QuorumThreshold => "quorumThreshold",
            Self::VotingPeriod => "votingPeriod",
            Self::ExecutionDelay => "executionDelay",
            Self::ProposalThreshold => "proposalThreshold",
            Self::InitialDeposit => "initialDeposit",
            Self::RecurringAmount => "recurringAmount",
            Self::RecurringFrequency => "recurringFrequency",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrusteeAddress(i) | Self::TrusteeEmail(i) | Self::TrusteeName(i) => {
                write!(f, "{}[{}]", self.name(), i)
            }
            _ => f.write_str(self.name()),
        }
    }
}

/// A blocking error attached to the field that caused it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The wizard sections that have a validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Settings,
    Trustees,
    Governance,
    Deposit,
}

impl StepKind {
    pub const ALL: [StepKind; 4] = [
        StepKind::Settings,
        StepKind::Trustees,
        StepKind::Governance,
        StepKind::Deposit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Trustees => "trustees",
            Self::Governance => "governance",
            Self::Deposit => "deposit",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one wizard step.
///
/// Errors block navigation; warnings are advisory only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepValidation {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
    pub warnings: Vec<String>,
}

impl StepValidation {
    pub fn new(errors: Vec<FieldError>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Error messages in the order they were produced.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_str())
    }

    /// First error reported for `field`.
    pub fn error_for(&self, field: FieldId) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// All errors reported for `field`, in order.
    pub fn errors_for(&self, field: FieldId) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn has_error(&self, message: &str) -> bool {
        self.messages().any(|m| m == message)
    }
}

/// A step with nothing to report.
impl Default for StepValidation {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

/// Collects errors and warnings while a validator runs.
#[derive(Debug, Default)]
pub(crate) struct Report {
    errors: Vec<FieldError>,
    warnings: Vec<String>,
}

impl Report {
    pub(crate) fn error(&mut self, field: FieldId, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub(crate) fn errors(&mut self, field: FieldId, messages: Vec<String>) {
        self.errors
            .extend(messages.into_iter().map(|m| FieldError::new(field, m)));
    }

    pub(crate) fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub(crate) fn finish(self) -> StepValidation {
        StepValidation::new(self.errors, self.warnings)
    }
}
