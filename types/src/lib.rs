//! Data model for WorthyTrust trust creation.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! wallet addresses, the four wizard sections (settings, trustees, governance,
//! deposit), their default factories, and calendar helpers.

pub mod address;
pub mod defaults;
pub mod deposit;
pub mod error;
pub mod form;
pub mod governance;
pub mod settings;
pub mod time;
pub mod trustee;

pub use address::WalletAddress;
pub use deposit::{DepositCurrency, DepositSettings, FundingSource};
pub use error::WorthyError;
pub use form::CreateTrustFormData;
pub use governance::GovernanceSettings;
pub use settings::{
    AssetTarget, PayoutCurrency, PayoutFrequency, PayoutMethod, RebalancingStrategy, TrustDuration,
    TrustSettings, TrusteePermissions,
};
pub use time::MonthYear;
pub use trustee::{Trustee, TrusteeDraft, TrusteeRole};
