use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use worthy_governance::{
    GovernanceError, NewProposalData, ProposalAction, ProposalBook, ProposalScope, TallyOutcome,
};
use worthy_types::{GovernanceSettings, TrusteePermissions, WalletAddress};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn trustees(n: usize) -> Vec<WalletAddress> {
    (0..n)
        .map(|i| WalletAddress::parse(&format!("0x{:040x}", i + 1)).unwrap())
        .collect()
}

fn draft() -> NewProposalData {
    NewProposalData {
        scope: ProposalScope::Global,
        action: Some(ProposalAction::AssetAllocation),
        title: "Rebalance".into(),
        description: "Move to 50/50".into(),
    }
}

proptest! {
    /// The tally passes exactly when approvals reach the requirement, and no
    /// trustee can vote twice.
    #[test]
    fn passes_once_quorum_reached(n in 1usize..8, quorum in 1u32..8, approvals in 0usize..8) {
        let wallets = trustees(n);
        let mut book = ProposalBook::new(wallets.clone());
        let governance = GovernanceSettings {
            quorum_threshold: Some(quorum),
            voting_period: Some(7),
            ..Default::default()
        };
        let id = book
            .submit(&wallets[0], &draft(), &TrusteePermissions::default(), &governance, now())
            .unwrap();
        let required = book.get(id).unwrap().total_votes_required as usize;
        prop_assert_eq!(required, (quorum as usize).min(n));

        let mut outcome = TallyOutcome::Open;
        for wallet in wallets.iter().take(approvals.min(n)) {
            outcome = book.cast_vote(id, wallet, true, now()).unwrap_or(outcome);
        }
        let cast = approvals.min(n);
        if cast >= required {
            prop_assert_eq!(outcome, TallyOutcome::Passed);
        } else {
            prop_assert_eq!(outcome, TallyOutcome::Open);
            let repeat = if cast > 0 { book.cast_vote(id, &wallets[0], true, now()) } else { Ok(outcome) };
            if cast > 0 {
                prop_assert!(matches!(repeat, Err(GovernanceError::AlreadyVoted(_))));
            }
        }
    }
}
