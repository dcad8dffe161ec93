//! The validated payload handed to deployment once the wizard completes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use worthy_types::{CreateTrustFormData, WalletAddress};

use crate::error::WizardError;

/// A fully validated trust, ready for an external deployer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustSubmission {
    #[serde(flatten)]
    pub form: CreateTrustFormData,
    /// Wallet connected when the submission was prepared, if any.
    pub connected_wallet: Option<WalletAddress>,
    pub prepared_at: NaiveDateTime,
    /// Non-blocking warnings gathered across all steps.
    pub warnings: Vec<String>,
}

impl TrustSubmission {
    pub fn to_json(&self) -> Result<String, WizardError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, WizardError> {
        Ok(serde_json::from_str(json)?)
    }
}
