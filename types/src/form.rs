//! The complete wizard form: one section per step.

use serde::{Deserialize, Serialize};

use crate::deposit::DepositSettings;
use crate::governance::GovernanceSettings;
use crate::settings::TrustSettings;
use crate::trustee::Trustee;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTrustFormData {
    pub settings: TrustSettings,
    pub trustees: Vec<Trustee>,
    pub governance: GovernanceSettings,
    pub deposit: DepositSettings,
}
