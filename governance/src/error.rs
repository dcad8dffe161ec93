use thiserror::Error;

use crate::proposal::ProposalAction;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("proposal draft is incomplete: {0}")]
    DraftIncomplete(&'static str),

    #[error("trustees lack the permission required to propose '{0}'")]
    MissingPermission(ProposalAction),

    #[error("proposal {0} not found")]
    ProposalNotFound(u64),

    #[error("wallet {0} has already voted on this proposal")]
    AlreadyVoted(String),

    #[error("voting window has closed for this proposal")]
    VotingClosed,

    #[error("wallet {0} is not a trustee of this trust")]
    NotATrustee(String),
}
