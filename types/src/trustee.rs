//! Trustees invited during the wizard.

use serde::{Deserialize, Serialize};

use crate::settings::TrusteePermissions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrusteeRole {
    Creator,
    #[default]
    Trustee,
    Guardian,
}

/// A trustee as held in wizard state.
///
/// `is_confirmed` is true iff a non-blank address is set; use
/// [`Trustee::set_address`] to keep it in sync.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trustee {
    pub id: String,
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: TrusteeRole,
    #[serde(default)]
    pub is_confirmed: bool,
    #[serde(default)]
    pub permissions: Option<TrusteePermissions>,
}

impl Trustee {
    pub fn new(id: impl Into<String>, address: impl Into<String>) -> Self {
        let address = address.into();
        Self {
            id: id.into(),
            is_confirmed: !address.trim().is_empty(),
            address,
            name: None,
            email: None,
            role: TrusteeRole::Trustee,
            permissions: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
        self.is_confirmed = !self.address.trim().is_empty();
    }

    /// Display name, if one was entered.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// A trustee before it is given an id by the wizard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrusteeDraft {
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: TrusteeRole,
}

impl TrusteeDraft {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach an id, deriving the confirmation flag from the address.
    pub fn into_trustee(self, id: String, permissions: TrusteePermissions) -> Trustee {
        let mut trustee = Trustee::new(id, self.address);
        trustee.name = self.name;
        trustee.email = self.email;
        trustee.role = self.role;
        trustee.permissions = Some(permissions);
        trustee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_follows_address() {
        let mut t = Trustee::new("1", "");
        assert!(!t.is_confirmed);
        t.set_address("0xabc");
        assert!(t.is_confirmed);
        t.set_address("   ");
        assert!(!t.is_confirmed);
    }

    #[test]
    fn empty_name_is_no_display_name() {
        let t = Trustee::new("1", "0x1").with_name("");
        assert_eq!(t.display_name(), None);
        let t = Trustee::new("1", "0x1").with_name("Alice");
        assert_eq!(t.display_name(), Some("Alice"));
    }

    #[test]
    fn draft_becomes_confirmed_trustee() {
        let perms = TrusteePermissions {
            can_dissolve: true,
            ..Default::default()
        };
        let t = TrusteeDraft::new("0xabc")
            .with_name("Bob")
            .into_trustee("42".into(), perms);
        assert_eq!(t.id, "42");
        assert!(t.is_confirmed);
        assert_eq!(t.permissions, Some(perms));
        assert_eq!(t.name.as_deref(), Some("Bob"));
    }
}
