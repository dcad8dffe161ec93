//! Initial wizard state.
//!
//! Every function builds a fresh value; nothing here is a shared static, so a
//! new wizard session can never observe edits made in a previous one.

use crate::deposit::{DepositCurrency, DepositSettings, FundingSource};
use crate::form::CreateTrustFormData;
use crate::governance::GovernanceSettings;
use crate::settings::{
    AssetTarget, PayoutCurrency, PayoutFrequency, PayoutMethod, RebalancingStrategy, TrustDuration,
    TrustSettings, TrusteePermissions,
};

/// View-only: every permission disabled.
pub fn default_trustee_permissions() -> TrusteePermissions {
    TrusteePermissions::default()
}

/// ETH 100 %, BTC 0 %. Neither can be removed from the allocation table.
pub fn default_asset_targets() -> Vec<AssetTarget> {
    vec![
        AssetTarget {
            removable: false,
            ..AssetTarget::new("ETH", "Ethereum", 100.0)
        },
        AssetTarget {
            removable: false,
            ..AssetTarget::new("BTC", "Bitcoin", 0.0)
        },
    ]
}

pub fn default_trust_settings() -> TrustSettings {
    TrustSettings {
        trust_name: Some(String::new()),
        purpose_statement: Some(String::new()),
        duration: Some(TrustDuration::Perpetual),
        beneficiary_address: Some(String::new()),
        beneficiary_name: Some(String::new()),
        emergency_clause: Some(false),
        revocable: Some(false),

        payout_amount: Some(0.0),
        payout_currency: Some(PayoutCurrency::Usdc),
        payout_frequency: Some(PayoutFrequency::Monthly),
        payout_method: Some(PayoutMethod::InKind),

        asset_targets: Some(default_asset_targets()),
        rebalancing_strategy: Some(RebalancingStrategy::Manual),
        number_of_trustees: Some(3),
        quorum_required: Some(2),
        trustee_permissions: Some(default_trustee_permissions()),
        ..Default::default()
    }
}

pub fn default_governance_settings() -> GovernanceSettings {
    GovernanceSettings {
        quorum_threshold: Some(1),
        voting_period: Some(7),
        execution_delay: Some(1),
        proposal_threshold: Some(1),
    }
}

pub fn default_deposit_settings() -> DepositSettings {
    DepositSettings {
        initial_deposit: Some(0.0),
        currency: Some(DepositCurrency::Usdc),
        funding_source: Some(FundingSource::Wallet),
        recurring_deposits: false,
        recurring_amount: None,
        recurring_frequency: None,
    }
}

pub fn default_form_data() -> CreateTrustFormData {
    CreateTrustFormData {
        settings: default_trust_settings(),
        trustees: Vec::new(),
        governance: default_governance_settings(),
        deposit: default_deposit_settings(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allocate_everything_to_eth() {
        let settings = default_trust_settings();
        assert_eq!(settings.total_allocation(), 100.0);
        assert!(settings
            .asset_targets
            .as_ref()
            .unwrap()
            .iter()
            .all(|t| !t.removable));
    }

    #[test]
    fn each_call_returns_an_independent_value() {
        let mut first = default_form_data();
        first.settings.asset_targets.as_mut().unwrap()[0].percentage = 10.0;
        first
            .settings
            .trustee_permissions
            .as_mut()
            .unwrap()
            .can_dissolve = true;

        let second = default_form_data();
        assert_eq!(second.settings.total_allocation(), 100.0);
        assert!(second.settings.trustee_permissions.unwrap().is_view_only());
    }

    #[test]
    fn governance_defaults() {
        let g = default_governance_settings();
        assert_eq!(g.quorum_threshold, Some(1));
        assert_eq!(g.voting_period, Some(7));
        assert_eq!(g.execution_delay, Some(1));
        assert_eq!(g.proposal_threshold, Some(1));
    }
}
