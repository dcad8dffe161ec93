//! The wizard's pages and their display metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One page of the wizard, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Settings,
    Trustees,
    Deposit,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Settings,
        WizardStep::Trustees,
        WizardStep::Deposit,
        WizardStep::Review,
    ];

    /// 1-based position.
    pub fn number(&self) -> usize {
        match self {
            Self::Settings => 1,
            Self::Trustees => 2,
            Self::Deposit => 3,
            Self::Review => 4,
        }
    }

    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Trustees => "trustees",
            Self::Deposit => "deposit",
            Self::Review => "review",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Settings => "Settings",
            Self::Trustees => "Trustees",
            Self::Deposit => "Deposit",
            Self::Review => "Review",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Settings => "Configure your trust settings and beneficiary details",
            Self::Trustees => "Add trustees and configure multi-signature requirements",
            Self::Deposit => "Set up initial funding and recurring deposits",
            Self::Review => "Review all settings and deploy your trust",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A step as rendered in the progress header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepInfo {
    pub id: usize,
    pub step: WizardStep,
    pub title: &'static str,
    pub description: &'static str,
    pub is_completed: bool,
    pub is_active: bool,
}

impl StepInfo {
    /// Steps before `current` are completed; `current` is active.
    pub(crate) fn relative_to(step: WizardStep, current: WizardStep) -> Self {
        Self {
            id: step.number(),
            step,
            title: step.title(),
            description: step.description(),
            is_completed: step < current,
            is_active: step == current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_round_trips() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_number(step.number()), Some(step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(5), None);
    }

    #[test]
    fn neighbours() {
        assert_eq!(WizardStep::Settings.previous(), None);
        assert_eq!(WizardStep::Settings.next(), Some(WizardStep::Trustees));
        assert_eq!(WizardStep::Review.next(), None);
    }

    #[test]
    fn info_flags() {
        let info = StepInfo::relative_to(WizardStep::Trustees, WizardStep::Deposit);
        assert!(info.is_completed);
        assert!(!info.is_active);
        let info = StepInfo::relative_to(WizardStep::Deposit, WizardStep::Deposit);
        assert!(info.is_active && !info.is_completed);
    }
}
