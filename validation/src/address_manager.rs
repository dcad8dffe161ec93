//! Which wallet addresses are in use, and by whom.
//!
//! [`WalletAddressManager`] is a read-only view derived from the current
//! trustee list, the settings section and the optionally connected wallet.
//! Rebuild it whenever those inputs change; it never mutates them.
//!
//! Conflicts come in two strengths. A hard conflict (two trustees sharing an
//! address, or a beneficiary taking a trustee's or the creator's address)
//! rejects the input. A soft overlap, where one party legitimately holds
//! several roles, is accepted with a warning.

use serde::{Deserialize, Serialize};
use std::fmt;

use worthy_types::address::{normalize, short_label};
use worthy_types::{Trustee, TrustSettings};

use crate::format::is_valid_ethereum_address;

/// A role an address can hold in a trust.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressRole {
    Trustee,
    Beneficiary,
    Creator,
}

impl AddressRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trustee => "trustee",
            Self::Beneficiary => "beneficiary",
            Self::Creator => "creator",
        }
    }
}

impl fmt::Display for AddressRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One current holder of an address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressUsage {
    pub role: AddressRole,
    /// Trustee id; `None` for the beneficiary and the creator.
    pub id: Option<String>,
    pub name: String,
}

impl AddressUsage {
    /// Phrase used in conflict errors, e.g. `trustee (Alice)`.
    pub fn describe(&self) -> String {
        match self.role {
            AddressRole::Trustee => format!("trustee ({})", self.name),
            AddressRole::Beneficiary => "beneficiary".to_string(),
            AddressRole::Creator => "trust creator".to_string(),
        }
    }
}

/// Result of screening an address typed into a role's input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status", content = "message")]
pub enum AddressCheck {
    Accepted,
    /// Accepted, but the address also holds another role.
    Warning(String),
    Rejected(String),
}

impl AddressCheck {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Rejected(e) => Some(e),
            _ => None,
        }
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Warning(w) => Some(w),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Overlap {
    /// The holder is the very entry being edited.
    Same,
    Soft,
    Hard,
}

fn classify(editing: AddressRole, holder: &AddressUsage, exclude_id: Option<&str>) -> Overlap {
    let excluded = holder.id.is_some() && holder.id.as_deref() == exclude_id;
    match (editing, holder.role) {
        (AddressRole::Trustee, AddressRole::Trustee) if excluded => Overlap::Same,
        (AddressRole::Trustee, AddressRole::Trustee) => Overlap::Hard,
        (AddressRole::Trustee, _) => Overlap::Soft,

        (AddressRole::Beneficiary, AddressRole::Beneficiary) => Overlap::Same,
        (AddressRole::Beneficiary, AddressRole::Trustee) if excluded => Overlap::Soft,
        (AddressRole::Beneficiary, AddressRole::Trustee) => Overlap::Hard,
        (AddressRole::Beneficiary, AddressRole::Creator) => Overlap::Hard,

        (AddressRole::Creator, AddressRole::Creator) => Overlap::Same,
        (AddressRole::Creator, _) => Overlap::Soft,
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(normalize).filter(|s| !s.is_empty())
}

/// Derived address bookkeeping over the wizard state.
#[derive(Clone, Debug)]
pub struct WalletAddressManager<'a> {
    trustees: &'a [Trustee],
    beneficiary_name: Option<&'a str>,
    trustee_addresses: Vec<String>,
    beneficiary_address: Option<String>,
    creator_address: Option<String>,
    used_addresses: Vec<String>,
}

impl<'a> WalletAddressManager<'a> {
    /// Build the view. `connected_wallet` stands in for the creator when the
    /// settings carry no creator address.
    pub fn new(
        trustees: &'a [Trustee],
        settings: &'a TrustSettings,
        connected_wallet: Option<&str>,
    ) -> Self {
        let trustee_addresses: Vec<String> = trustees
            .iter()
            .map(|t| t.address.to_lowercase())
            .filter(|a| is_valid_ethereum_address(a))
            .collect();
        let beneficiary_address = non_blank(settings.beneficiary_address.as_deref());
        let creator_address =
            non_blank(settings.creator_address.as_deref()).or_else(|| non_blank(connected_wallet));

        let mut used_addresses: Vec<String> = Vec::with_capacity(trustee_addresses.len() + 2);
        for address in trustee_addresses
            .iter()
            .chain(beneficiary_address.iter())
            .chain(creator_address.iter())
        {
            if !used_addresses.contains(address) {
                used_addresses.push(address.clone());
            }
        }

        Self {
            trustees,
            beneficiary_name: settings.beneficiary_name.as_deref(),
            trustee_addresses,
            beneficiary_address,
            creator_address,
            used_addresses,
        }
    }

    /// Lower-cased, well-formed trustee addresses.
    pub fn trustee_addresses(&self) -> &[String] {
        &self.trustee_addresses
    }

    pub fn beneficiary_address(&self) -> Option<&str> {
        self.beneficiary_address.as_deref()
    }

    pub fn creator_address(&self) -> Option<&str> {
        self.creator_address.as_deref()
    }

    /// Union of every address above, without repeats.
    pub fn used_addresses(&self) -> &[String] {
        &self.used_addresses
    }

    pub fn is_address_in_use(&self, address: &str) -> bool {
        let needle = normalize(address);
        self.used_addresses.iter().any(|a| *a == needle)
    }

    /// Whether `address` is held by a trustee other than `exclude_id`, by the
    /// beneficiary, or by the creator.
    pub fn is_address_duplicate(&self, address: &str, exclude_id: Option<&str>) -> bool {
        let needle = normalize(address);
        let in_trustees = self.trustees.iter().any(|t| {
            t.address.to_lowercase() == needle && exclude_id.map_or(true, |id| t.id != id)
        });
        in_trustees
            || self.beneficiary_address.as_deref() == Some(needle.as_str())
            || self.creator_address.as_deref() == Some(needle.as_str())
    }

    /// Every role currently holding `address`: trustees first, then the
    /// beneficiary, then the creator.
    pub fn get_address_usage(&self, address: &str) -> Vec<AddressUsage> {
        let needle = normalize(address);
        let mut usage: Vec<AddressUsage> = self
            .trustees
            .iter()
            .filter(|t| t.address.to_lowercase() == needle)
            .map(|t| AddressUsage {
                role: AddressRole::Trustee,
                id: Some(t.id.clone()),
                name: t
                    .display_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Trustee {}", short_label(&t.address))),
            })
            .collect();

        if self.beneficiary_address.as_deref() == Some(needle.as_str()) {
            usage.push(AddressUsage {
                role: AddressRole::Beneficiary,
                id: None,
                name: self
                    .beneficiary_name
                    .filter(|n| !n.is_empty())
                    .unwrap_or("Beneficiary")
                    .to_string(),
            });
        }

        if self.creator_address.as_deref() == Some(needle.as_str()) {
            usage.push(AddressUsage {
                role: AddressRole::Creator,
                id: None,
                name: "Trust Creator".to_string(),
            });
        }

        usage
    }

    /// Screen an address typed into the input for `role`.
    ///
    /// `exclude_id` names the trustee being edited (for `Trustee`), or the
    /// trustee the beneficiary is knowingly shared with (for `Beneficiary`).
    pub fn validate_new_address(
        &self,
        address: &str,
        role: AddressRole,
        exclude_id: Option<&str>,
    ) -> AddressCheck {
        let normalized = normalize(address);
        if !is_valid_ethereum_address(&normalized) {
            return AddressCheck::Rejected("Please enter a valid Ethereum address (0x...)".into());
        }

        let usage = self.get_address_usage(&normalized);
        let (hard, soft): (Vec<&AddressUsage>, Vec<&AddressUsage>) = usage
            .iter()
            .filter(|u| classify(role, u, exclude_id) != Overlap::Same)
            .partition(|u| classify(role, u, exclude_id) == Overlap::Hard);

        if !hard.is_empty() {
            let described: Vec<String> = hard.iter().map(|u| u.describe()).collect();
            tracing::debug!(role = %role, conflicts = hard.len(), "address rejected");
            return AddressCheck::Rejected(format!(
                "This address is already used as {}",
                described.join(", ")
            ));
        }

        if soft.is_empty() {
            return AddressCheck::Accepted;
        }

        let mut roles: Vec<&str> = Vec::new();
        for u in &soft {
            if !roles.contains(&u.role.as_str()) {
                roles.push(u.role.as_str());
            }
        }
        let roles = roles.join(", ");

        AddressCheck::Warning(match role {
            AddressRole::Trustee => format!(
                "This address is also the {roles}. Consider using different addresses for different roles."
            ),
            AddressRole::Beneficiary => {
                "The beneficiary is also a trustee. This may create conflicts of interest.".to_string()
            }
            AddressRole::Creator => format!(
                "You are also the {roles}. This is allowed but may affect trust governance."
            ),
        })
    }
}
