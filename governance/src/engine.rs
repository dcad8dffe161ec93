//! The proposal book: submission, voting and tallying for one trust.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use worthy_types::defaults::default_governance_settings;
use worthy_types::{GovernanceSettings, TrusteePermissions, WalletAddress};

use crate::error::GovernanceError;
use crate::proposal::{NewProposalData, Proposal, ProposalScope, ProposalStatus};

/// Result of counting the votes on a proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TallyOutcome {
    /// Still collecting votes.
    Open,
    Passed,
    Rejected,
}

/// All proposals of a trust, voted on by its trustees.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposalBook {
    trustees: BTreeSet<WalletAddress>,
    proposals: BTreeMap<u64, Proposal>,
    next_id: u64,
}

impl ProposalBook {
    pub fn new(trustees: impl IntoIterator<Item = WalletAddress>) -> Self {
        Self {
            trustees: trustees.into_iter().collect(),
            proposals: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn trustee_count(&self) -> usize {
        self.trustees.len()
    }

    fn ensure_trustee(&self, wallet: &WalletAddress) -> Result<(), GovernanceError> {
        if self.trustees.contains(wallet) {
            Ok(())
        } else {
            Err(GovernanceError::NotATrustee(wallet.to_string()))
        }
    }

    /// Submit a draft on behalf of `proposer`.
    ///
    /// Trust-scope proposals require `permissions` to allow the action.
    /// Voting runs for the configured voting period, and the proposal needs
    /// the quorum threshold (capped at the trustee count) in approvals.
    pub fn submit(
        &mut self,
        proposer: &WalletAddress,
        data: &NewProposalData,
        permissions: &TrusteePermissions,
        governance: &GovernanceSettings,
        now: NaiveDateTime,
    ) -> Result<u64, GovernanceError> {
        let action = data.validate()?;
        self.ensure_trustee(proposer)?;
        if data.scope == ProposalScope::Trust && !action.is_permitted_by(permissions) {
            return Err(GovernanceError::MissingPermission(action));
        }

        let fallback = default_governance_settings();
        let voting_days = governance
            .voting_period
            .or(fallback.voting_period)
            .unwrap_or(7);
        let trustee_count = u32::try_from(self.trustee_count()).unwrap_or(u32::MAX);
        let required = governance
            .quorum_threshold
            .or(fallback.quorum_threshold)
            .unwrap_or(1)
            .clamp(1, trustee_count.max(1));

        let id = self.next_id;
        self.next_id += 1;
        let proposal = Proposal {
            id,
            proposer: proposer.clone(),
            scope: data.scope,
            action,
            title: data.title.trim().to_string(),
            description: data.description.trim().to_string(),
            status: ProposalStatus::Active,
            votes_for: 0,
            votes_against: 0,
            total_votes_required: required,
            created_at: now,
            end_date: now + Duration::days(i64::from(voting_days)),
            voters: BTreeSet::new(),
        };
        tracing::info!(
            id,
            action = %action,
            required,
            end = %proposal.end_date,
            "proposal submitted"
        );
        self.proposals.insert(id, proposal);
        Ok(id)
    }

    /// Record one trustee's vote. Each trustee votes at most once.
    pub fn cast_vote(
        &mut self,
        id: u64,
        voter: &WalletAddress,
        approve: bool,
        now: NaiveDateTime,
    ) -> Result<TallyOutcome, GovernanceError> {
        self.ensure_trustee(voter)?;
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;
        if !proposal.is_open(now) {
            return Err(GovernanceError::VotingClosed);
        }
        if !proposal.voters.insert(voter.clone()) {
            return Err(GovernanceError::AlreadyVoted(voter.to_string()));
        }
        if approve {
            proposal.votes_for += 1;
        } else {
            proposal.votes_against += 1;
        }
        tracing::debug!(id, voter = %voter, approve, "vote recorded");
        self.tally(id, now)
    }

    /// Count the votes and settle the proposal once the outcome is certain.
    ///
    /// A proposal passes as soon as approvals reach the requirement. It is
    /// rejected when the window closes first, or when too few trustees are
    /// left to reach the requirement.
    pub fn tally(&mut self, id: u64, now: NaiveDateTime) -> Result<TallyOutcome, GovernanceError> {
        let trustee_count = u32::try_from(self.trustees.len()).unwrap_or(u32::MAX);
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;

        let outcome = match proposal.status {
            ProposalStatus::Passed => TallyOutcome::Passed,
            ProposalStatus::Rejected => TallyOutcome::Rejected,
            ProposalStatus::Active => {
                let undecided = trustee_count
                    .saturating_sub(proposal.votes_for + proposal.votes_against);
                if proposal.votes_for >= proposal.total_votes_required {
                    TallyOutcome::Passed
                } else if now >= proposal.end_date
                    || proposal.votes_for + undecided < proposal.total_votes_required
                {
                    TallyOutcome::Rejected
                } else {
                    TallyOutcome::Open
                }
            }
        };

        let settled = match outcome {
            TallyOutcome::Passed => Some(ProposalStatus::Passed),
            TallyOutcome::Rejected => Some(ProposalStatus::Rejected),
            TallyOutcome::Open => None,
        };
        if let Some(status) = settled {
            if proposal.status != status {
                proposal.status = status;
                tracing::info!(id, ?status, "proposal settled");
            }
        }
        Ok(outcome)
    }

    pub fn get(&self, id: u64) -> Option<&Proposal> {
        self.proposals.get(&id)
    }

    /// Proposals of one scope, oldest first.
    pub fn by_scope(&self, scope: ProposalScope) -> Vec<&Proposal> {
        self.proposals.values().filter(|p| p.scope == scope).collect()
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}
