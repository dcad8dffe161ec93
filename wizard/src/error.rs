use thiserror::Error;

use worthy_types::WorthyError;
use worthy_validation::{StepKind, StepValidation};

use crate::step::WizardStep;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("step {0} does not exist")]
    StepOutOfRange(usize),

    #[error("{step} step has {} validation error(s)", .validation.errors.len())]
    StepInvalid {
        step: WizardStep,
        validation: StepValidation,
    },

    #[error("address rejected: {0}")]
    AddressRejected(String),

    #[error("trustee {0} not found")]
    TrusteeNotFound(String),

    #[error("submission blocked by invalid steps: {0:?}")]
    SubmissionBlocked(Vec<StepKind>),

    #[error("invalid wallet: {0}")]
    Wallet(#[from] WorthyError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
