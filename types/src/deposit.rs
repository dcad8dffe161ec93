//! Initial and recurring funding of a trust.

use serde::{Deserialize, Serialize};

use crate::settings::PayoutFrequency;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DepositCurrency {
    Eth,
    Usdc,
    Usdt,
    Btc,
}

impl DepositCurrency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Eth => "ETH",
            Self::Usdc => "USDC",
            Self::Usdt => "USDT",
            Self::Btc => "BTC",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingSource {
    Wallet,
    BankTransfer,
    CryptoTransfer,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepositSettings {
    pub initial_deposit: Option<f64>,
    pub currency: Option<DepositCurrency>,
    pub funding_source: Option<FundingSource>,
    pub recurring_deposits: bool,
    /// Required when `recurring_deposits` is enabled.
    pub recurring_amount: Option<f64>,
    /// Required when `recurring_deposits` is enabled.
    pub recurring_frequency: Option<PayoutFrequency>,
}
