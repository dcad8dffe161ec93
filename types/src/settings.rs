//! Trust settings captured by the first wizard step.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time::MonthYear;

/// How long the trust lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustDuration {
    Perpetual,
    /// Ends at `TrustSettings::end_date`.
    Fixed,
}

/// Distribution cadence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutFrequency {
    Monthly,
    Quarterly,
    Annually,
}

impl PayoutFrequency {
    /// Number of payouts in one year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Monthly => 12,
            Self::Quarterly => 4,
            Self::Annually => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annually => "annually",
        }
    }
}

impl fmt::Display for PayoutFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayoutCurrency {
    Usd,
    Usdc,
    Usdt,
    Eth,
    Btc,
}

impl PayoutCurrency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Usdc => "USDC",
            Self::Usdt => "USDT",
            Self::Eth => "ETH",
            Self::Btc => "BTC",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayoutMethod {
    /// Pay out the held assets themselves.
    InKind,
    /// Convert to cash before paying out.
    Cash,
}

impl PayoutMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InKind => "in-kind",
            Self::Cash => "cash",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RebalancingStrategy {
    Manual,
    Auto,
    None,
}

/// Target share of trust assets earmarked for one token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTarget {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Percentage in `[0, 100]`.
    pub percentage: f64,
    #[serde(default)]
    pub removable: bool,
}

impl AssetTarget {
    pub fn new(symbol: &str, name: &str, percentage: f64) -> Self {
        Self {
            id: symbol.to_lowercase(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            percentage,
            removable: true,
        }
    }
}

/// Operational permissions granted to trustees.
///
/// A single set is shared by every trustee of a trust.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrusteePermissions {
    pub can_dissolve: bool,
    pub can_change_beneficiary: bool,
    pub can_adjust_payouts: bool,
    pub can_add_remove_trustees: bool,
    pub can_modify_asset_allocation: bool,
    pub can_remove_trustee: bool,
    pub can_disable_payouts: bool,
}

impl TrusteePermissions {
    /// Number of enabled permissions.
    pub fn enabled_count(&self) -> usize {
        [
            self.can_dissolve,
            self.can_change_beneficiary,
            self.can_adjust_payouts,
            self.can_add_remove_trustees,
            self.can_modify_asset_allocation,
            self.can_remove_trustee,
            self.can_disable_payouts,
        ]
        .iter()
        .filter(|p| **p)
        .count()
    }

    /// View-only trustees hold no permission at all.
    pub fn is_view_only(&self) -> bool {
        self.enabled_count() == 0
    }
}

/// Settings step state. Every field may be unset while the user is typing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrustSettings {
    pub trust_name: Option<String>,
    pub purpose_statement: Option<String>,
    pub duration: Option<TrustDuration>,
    /// End date as typed by the user; only meaningful for fixed trusts.
    pub end_date: Option<String>,
    pub beneficiary_address: Option<String>,
    pub beneficiary_name: Option<String>,
    pub creator_address: Option<String>,
    pub emergency_clause: Option<bool>,
    pub revocable: Option<bool>,

    pub asset_targets: Option<Vec<AssetTarget>>,
    pub rebalancing_strategy: Option<RebalancingStrategy>,

    pub payout_frequency: Option<PayoutFrequency>,
    pub payout_amount: Option<f64>,
    pub payout_currency: Option<PayoutCurrency>,
    pub payout_method: Option<PayoutMethod>,
    pub first_payment_date: Option<MonthYear>,

    pub distribution_method: Option<String>,
    pub number_of_trustees: Option<u32>,
    pub quorum_required: Option<u32>,
    pub trustee_permissions: Option<TrusteePermissions>,
}

impl TrustSettings {
    /// Sum of all allocation target percentages (0 when none are set).
    pub fn total_allocation(&self) -> f64 {
        self.asset_targets
            .as_deref()
            .unwrap_or_default()
            .iter()
            .fold(0.0, |acc, t| acc + t.percentage)
    }

    /// Projected yearly distribution, if both amount and frequency are set.
    pub fn annual_distribution(&self) -> Option<f64> {
        match (self.payout_amount, self.payout_frequency) {
            (Some(amount), Some(freq)) => Some(amount * f64::from(freq.periods_per_year())),
            _ => None,
        }
    }
}
