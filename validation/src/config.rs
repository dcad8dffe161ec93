//! Validation thresholds with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use worthy_types::WorthyError;

/// Every numeric bound the step validators enforce.
///
/// Can be loaded from a TOML file via [`ValidationLimits::from_toml_file`];
/// any field left out keeps its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Trust name length bounds (characters).
    pub trust_name_min_len: usize,
    pub trust_name_max_len: usize,

    /// Purpose statement length bounds (characters).
    pub purpose_min_len: usize,
    pub purpose_max_len: usize,

    /// Annual distribution above which a warning is raised (currency-agnostic).
    pub large_annual_distribution: f64,

    /// Allowed deviation of the allocation total from 100.
    pub allocation_tolerance: f64,

    pub min_trustees: usize,
    pub max_trustees: usize,
    /// More trustees than this raises a slow-governance warning.
    pub many_trustees_warning: usize,
    pub min_trustee_name_len: usize,

    /// Voting period bounds (days).
    pub min_voting_period: u32,
    pub max_voting_period: u32,
    /// Voting periods shorter than this raise a warning.
    pub short_voting_period_warning: u32,

    /// Execution delay bounds (days).
    pub min_execution_delay: u32,
    pub max_execution_delay: u32,

    pub min_initial_deposit: f64,
    /// Initial deposits below this raise a network-fee warning.
    pub small_deposit_warning: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            trust_name_min_len: 3,
            trust_name_max_len: 100,
            purpose_min_len: 10,
            purpose_max_len: 1000,
            large_annual_distribution: 1_000_000.0,
            allocation_tolerance: 1e-9,
            min_trustees: 1,
            max_trustees: 10,
            many_trustees_warning: 5,
            min_trustee_name_len: 2,
            min_voting_period: 1,
            max_voting_period: 30,
            short_voting_period_warning: 3,
            min_execution_delay: 0,
            max_execution_delay: 7,
            min_initial_deposit: 0.001,
            small_deposit_warning: 0.01,
        }
    }
}

impl ValidationLimits {
    /// Load limits from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, WorthyError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WorthyError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse limits from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, WorthyError> {
        let limits: Self = toml::from_str(s).map_err(|e| WorthyError::Config(e.to_string()))?;
        limits.check()?;
        Ok(limits)
    }

    /// Serialize the limits to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, WorthyError> {
        toml::to_string_pretty(self).map_err(|e| WorthyError::Serialization(e.to_string()))
    }

    /// Reject bounds that contradict each other.
    pub fn check(&self) -> Result<(), WorthyError> {
        let pairs = [
            ("trust_name", self.trust_name_min_len, self.trust_name_max_len),
            ("purpose", self.purpose_min_len, self.purpose_max_len),
            ("trustees", self.min_trustees, self.max_trustees),
            (
                "voting_period",
                self.min_voting_period as usize,
                self.max_voting_period as usize,
            ),
            (
                "execution_delay",
                self.min_execution_delay as usize,
                self.max_execution_delay as usize,
            ),
        ];
        for (name, min, max) in pairs {
            if min > max {
                return Err(WorthyError::Config(format!(
                    "{name}: minimum {min} exceeds maximum {max}"
                )));
            }
        }
        Ok(())
    }
}
