//! Validation core of the WorthyTrust creation wizard.
//!
//! Four layers, each built on the one before:
//! - `format`: syntactic predicates (addresses, emails, names, amounts, dates)
//! - `rules`: declarative per-field rule lists and their evaluator
//! - `address_manager`: cross-role address bookkeeping and conflict policy
//! - `steps`: one validator per wizard section plus `validate_all_steps`
//!
//! Everything here is pure: validators read wizard state and return data.
//! Errors block navigation, warnings never do.

pub mod address_manager;
pub mod config;
pub mod field;
pub mod format;
pub mod rules;
pub mod steps;

pub use address_manager::{AddressCheck, AddressRole, AddressUsage, WalletAddressManager};
pub use config::ValidationLimits;
pub use field::{FieldError, FieldId, StepKind, StepValidation};
pub use format::{
    is_valid_amount, is_valid_email, is_valid_ethereum_address, is_valid_future_date,
    is_valid_trust_name, is_valid_trust_name_within,
};
pub use rules::{validate_field, FieldValue, Rule, RuleKind};
pub use steps::{
    validate_all_steps, validate_deposit_step, validate_governance_step, validate_settings_step,
    validate_trustees_step, TrustValidator,
};
