//! Governance parameters chosen for a new trust.

use serde::{Deserialize, Serialize};

/// Multi-signature governance settings. Periods are in days.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernanceSettings {
    /// Trustees whose approval is needed to execute an action.
    pub quorum_threshold: Option<u32>,
    pub voting_period: Option<u32>,
    /// Days between a passed vote and its execution.
    pub execution_delay: Option<u32>,
    /// Trustees needed to open a proposal.
    pub proposal_threshold: Option<u32>,
}
