//! Governance proposals and the draft collected while creating one.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use worthy_types::{TrusteePermissions, WalletAddress};

use crate::error::GovernanceError;

/// Who a proposal affects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalScope {
    /// Only this trust.
    #[default]
    Trust,
    /// Every trust on the platform.
    Global,
}

/// What a proposal asks the trustees to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalAction {
    Dissolve,
    ChangeBeneficiary,
    AdjustPayouts,
    ManageTrustees,
    AssetAllocation,
    RemoveTrustee,
    DisablePayouts,
}

impl ProposalAction {
    pub const ALL: [ProposalAction; 7] = [
        Self::Dissolve,
        Self::ChangeBeneficiary,
        Self::AdjustPayouts,
        Self::ManageTrustees,
        Self::AssetAllocation,
        Self::RemoveTrustee,
        Self::DisablePayouts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dissolve => "Dissolve Trust",
            Self::ChangeBeneficiary => "Change Beneficiary",
            Self::AdjustPayouts => "Adjust Payouts",
            Self::ManageTrustees => "Manage Trustees",
            Self::AssetAllocation => "Asset Allocation",
            Self::RemoveTrustee => "Remove Trustee",
            Self::DisablePayouts => "Disable Payouts",
        }
    }

    /// Whether `permissions` carries the flag this action requires.
    pub fn is_permitted_by(&self, permissions: &TrusteePermissions) -> bool {
        match self {
            Self::Dissolve => permissions.can_dissolve,
            Self::ChangeBeneficiary => permissions.can_change_beneficiary,
            Self::AdjustPayouts => permissions.can_adjust_payouts,
            Self::ManageTrustees => permissions.can_add_remove_trustees,
            Self::AssetAllocation => permissions.can_modify_asset_allocation,
            Self::RemoveTrustee => permissions.can_remove_trustee,
            Self::DisablePayouts => permissions.can_disable_payouts,
        }
    }
}

impl fmt::Display for ProposalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Proposal draft as filled in by the creation dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProposalData {
    pub scope: ProposalScope,
    pub action: Option<ProposalAction>,
    pub title: String,
    pub description: String,
}

impl NewProposalData {
    pub fn new(scope: ProposalScope) -> Self {
        Self {
            scope,
            ..Default::default()
        }
    }

    /// The first dialog step is done once an action is picked.
    pub fn action_step_complete(&self) -> bool {
        self.action.is_some()
    }

    /// The second dialog step needs a title and a description.
    pub fn details_step_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    /// Check the draft is ready to submit and return its action.
    pub fn validate(&self) -> Result<ProposalAction, GovernanceError> {
        let action = self
            .action
            .ok_or(GovernanceError::DraftIncomplete("no action selected"))?;
        if self.title.trim().is_empty() {
            return Err(GovernanceError::DraftIncomplete("title is required"));
        }
        if self.description.trim().is_empty() {
            return Err(GovernanceError::DraftIncomplete("description is required"));
        }
        Ok(action)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Active,
    Passed,
    Rejected,
}

/// A submitted proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: u64,
    pub proposer: WalletAddress,
    pub scope: ProposalScope,
    pub action: ProposalAction,
    pub title: String,
    pub description: String,
    pub status: ProposalStatus,
    pub votes_for: u32,
    pub votes_against: u32,
    /// Approvals needed to pass.
    pub total_votes_required: u32,
    pub created_at: NaiveDateTime,
    pub end_date: NaiveDateTime,
    /// Wallets that have voted, in either direction.
    pub voters: BTreeSet<WalletAddress>,
}

impl Proposal {
    /// Votes can be cast while the proposal is active and before its end date.
    pub fn is_open(&self, now: NaiveDateTime) -> bool {
        self.status == ProposalStatus::Active && now < self.end_date
    }

    pub fn has_voted(&self, voter: &WalletAddress) -> bool {
        self.voters.contains(voter)
    }

    pub fn days_remaining_label(&self, now: NaiveDateTime) -> String {
        worthy_utils::days_remaining_label(self.end_date, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_action_maps_to_its_own_flag() {
        for action in ProposalAction::ALL {
            assert!(!action.is_permitted_by(&TrusteePermissions::default()));
        }
        let perms = TrusteePermissions {
            can_add_remove_trustees: true,
            ..Default::default()
        };
        let allowed: Vec<ProposalAction> = ProposalAction::ALL
            .into_iter()
            .filter(|a| a.is_permitted_by(&perms))
            .collect();
        assert_eq!(allowed, vec![ProposalAction::ManageTrustees]);
    }

    #[test]
    fn draft_steps() {
        let mut draft = NewProposalData::new(ProposalScope::Trust);
        assert!(!draft.action_step_complete());
        assert_eq!(
            draft.validate(),
            Err(GovernanceError::DraftIncomplete("no action selected"))
        );

        draft.action = Some(ProposalAction::AdjustPayouts);
        assert!(draft.action_step_complete());
        assert!(!draft.details_step_complete());

        draft.title = "Raise monthly payout".into();
        assert_eq!(
            draft.validate(),
            Err(GovernanceError::DraftIncomplete("description is required"))
        );

        draft.description = "Inflation adjustment".into();
        assert!(draft.details_step_complete());
        assert_eq!(draft.validate(), Ok(ProposalAction::AdjustPayouts));
    }

    #[test]
    fn wire_names() {
        let json = serde_json::to_string(&ProposalAction::ChangeBeneficiary).unwrap();
        assert_eq!(json, "\"change_beneficiary\"");
        let draft: NewProposalData =
            serde_json::from_str(r#"{"scope":"global","action":null,"title":"","description":""}"#)
                .unwrap();
        assert_eq!(draft.scope, ProposalScope::Global);
    }
}
