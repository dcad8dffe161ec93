//! The four-step trust creation wizard.
//!
//! [`CreateTrustWizard`] owns the in-progress form, moves between steps only
//! when the current step validates, and hands a [`TrustSubmission`] to the
//! caller once every step is valid. Nothing is persisted here.

pub mod error;
pub mod review;
pub mod step;
pub mod submission;
pub mod wizard;

pub use error::WizardError;
pub use review::ReviewLine;
pub use step::{StepInfo, WizardStep};
pub use submission::TrustSubmission;
pub use wizard::{AddedTrustee, CreateTrustWizard, GovernanceRecommendations};
