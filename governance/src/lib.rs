//! Trustee governance for WorthyTrust.
//!
//! Trustees draft proposals in two steps (pick scope and action, then
//! describe it), submit them to a [`ProposalBook`], and vote until the
//! quorum threshold is reached or the voting period runs out.
//!
//! Trust-scope proposals are gated by the shared trustee permission set:
//! each action requires the matching permission flag.

pub mod engine;
pub mod error;
pub mod proposal;

pub use engine::{ProposalBook, TallyOutcome};
pub use error::GovernanceError;
pub use proposal::{NewProposalData, Proposal, ProposalAction, ProposalScope, ProposalStatus};
