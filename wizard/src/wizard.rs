//! Wizard state and navigation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use worthy_types::defaults::default_form_data;
use worthy_types::{
    CreateTrustFormData, DepositSettings, GovernanceSettings, TrustSettings, Trustee,
    TrusteeDraft, TrusteePermissions, WalletAddress,
};
use worthy_validation::{
    AddressCheck, AddressRole, StepValidation, TrustValidator, ValidationLimits,
    WalletAddressManager,
};

use crate::error::WizardError;
use crate::review::{review_summary, ReviewLine};
use crate::step::{StepInfo, WizardStep};
use crate::submission::TrustSubmission;

/// Outcome of [`CreateTrustWizard::add_trustee`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddedTrustee {
    pub id: String,
    /// Role-overlap warning to show next to the new trustee.
    pub warning: Option<String>,
}

/// Suggested governance bounds for the current trustee count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceRecommendations {
    pub recommended_quorum: usize,
    pub max_quorum: usize,
    pub recommended_proposal_threshold: usize,
    pub max_proposal_threshold: usize,
}

/// Concatenate step results, dropping repeated errors and warnings.
fn merge(results: impl IntoIterator<Item = StepValidation>) -> StepValidation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for result in results {
        for error in result.errors {
            if !errors.contains(&error) {
                errors.push(error);
            }
        }
        for warning in result.warnings {
            if !warnings.contains(&warning) {
                warnings.push(warning);
            }
        }
    }
    StepValidation::new(errors, warnings)
}

pub struct CreateTrustWizard {
    current: WizardStep,
    form: CreateTrustFormData,
    connected_wallet: Option<WalletAddress>,
    validator: TrustValidator,
    last_trustee_id: i64,
}

impl Default for CreateTrustWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateTrustWizard {
    pub fn new() -> Self {
        Self::with_limits(ValidationLimits::default())
    }

    pub fn with_limits(limits: ValidationLimits) -> Self {
        Self {
            current: WizardStep::Settings,
            form: default_form_data(),
            connected_wallet: None,
            validator: TrustValidator::new(limits),
            last_trustee_id: 0,
        }
    }

    // ── Navigation ──────────────────────────────────────────────────────

    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    pub fn steps(&self) -> Vec<StepInfo> {
        WizardStep::ALL
            .into_iter()
            .map(|step| StepInfo::relative_to(step, self.current))
            .collect()
    }

    pub fn is_first_step(&self) -> bool {
        self.current.previous().is_none()
    }

    pub fn is_last_step(&self) -> bool {
        self.current.next().is_none()
    }

    pub fn completed_steps_count(&self) -> usize {
        self.current.number() - 1
    }

    /// Share of steps completed, 0 to 75 (Review itself is never completed).
    pub fn progress_percentage(&self) -> f64 {
        self.completed_steps_count() as f64 / WizardStep::ALL.len() as f64 * 100.0
    }

    /// Validate whatever the current step is responsible for.
    pub fn validate_current_step(&self, now: NaiveDateTime) -> StepValidation {
        let form = &self.form;
        let v = &self.validator;
        match self.current {
            WizardStep::Settings => v.validate_settings_step(&form.settings, now),
            WizardStep::Trustees => merge([
                v.validate_trustees_step(&form.trustees, &form.governance),
                v.validate_governance_step(&form.governance, form.trustees.len()),
            ]),
            WizardStep::Deposit => v.validate_deposit_step(&form.deposit),
            WizardStep::Review => merge(
                v.validate_all_steps(
                    &form.settings,
                    &form.trustees,
                    &form.governance,
                    &form.deposit,
                    now,
                )
                .into_values(),
            ),
        }
    }

    /// Move forward if the current step is valid. On the last step the
    /// wizard stays put.
    pub fn advance(&mut self, now: NaiveDateTime) -> Result<WizardStep, WizardError> {
        let validation = self.validate_current_step(now);
        if !validation.is_valid {
            tracing::debug!(
                step = %self.current,
                errors = validation.errors.len(),
                "advance blocked"
            );
            return Err(WizardError::StepInvalid {
                step: self.current,
                validation,
            });
        }
        if let Some(next) = self.current.next() {
            tracing::info!(from = %self.current, to = %next, "wizard advanced");
            self.current = next;
        }
        Ok(self.current)
    }

    pub fn previous_step(&mut self) -> WizardStep {
        if let Some(prev) = self.current.previous() {
            self.current = prev;
        }
        self.current
    }

    /// Jump to the 1-based step `n` without validating.
    pub fn go_to_step(&mut self, n: usize) -> Result<WizardStep, WizardError> {
        let step = WizardStep::from_number(n).ok_or(WizardError::StepOutOfRange(n))?;
        self.current = step;
        Ok(step)
    }

    // ── Form sections ───────────────────────────────────────────────────

    pub fn form_data(&self) -> &CreateTrustFormData {
        &self.form
    }

    pub fn trustees(&self) -> &[Trustee] {
        &self.form.trustees
    }

    pub fn update_settings(&mut self, f: impl FnOnce(&mut TrustSettings)) {
        f(&mut self.form.settings);
    }

    pub fn update_governance(&mut self, f: impl FnOnce(&mut GovernanceSettings)) {
        f(&mut self.form.governance);
    }

    pub fn update_deposit(&mut self, f: impl FnOnce(&mut DepositSettings)) {
        f(&mut self.form.deposit);
    }

    // ── Trustees ────────────────────────────────────────────────────────

    /// Add a trustee, screening its address against every role in use.
    ///
    /// The id is `now_millis`, bumped past the previous id when two trustees
    /// are added within the same millisecond.
    pub fn add_trustee(
        &mut self,
        draft: TrusteeDraft,
        now_millis: i64,
    ) -> Result<AddedTrustee, WizardError> {
        let warning = if draft.address.trim().is_empty() {
            None
        } else {
            match self
                .address_manager()
                .validate_new_address(&draft.address, AddressRole::Trustee, None)
            {
                AddressCheck::Accepted => None,
                AddressCheck::Warning(w) => Some(w),
                AddressCheck::Rejected(reason) => {
                    tracing::warn!(%reason, "trustee address rejected");
                    return Err(WizardError::AddressRejected(reason));
                }
            }
        };

        let id = now_millis.max(self.last_trustee_id + 1);
        self.last_trustee_id = id;
        let permissions = self.shared_permissions();
        let trustee = draft.into_trustee(id.to_string(), permissions);
        tracing::info!(id, confirmed = trustee.is_confirmed, "trustee added");
        self.form.trustees.push(trustee);

        Ok(AddedTrustee {
            id: id.to_string(),
            warning,
        })
    }

    pub fn remove_trustee(&mut self, id: &str) -> Result<Trustee, WizardError> {
        let index = self
            .form
            .trustees
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| WizardError::TrusteeNotFound(id.to_string()))?;
        tracing::info!(id, "trustee removed");
        Ok(self.form.trustees.remove(index))
    }

    pub fn shared_permissions(&self) -> TrusteePermissions {
        self.form.settings.trustee_permissions.unwrap_or_default()
    }

    /// Every trustee shares one permission set; update it everywhere.
    pub fn set_shared_permissions(&mut self, permissions: TrusteePermissions) {
        self.form.settings.trustee_permissions = Some(permissions);
        for trustee in &mut self.form.trustees {
            trustee.permissions = Some(permissions);
        }
    }

    pub fn governance_recommendations(&self) -> GovernanceRecommendations {
        let n = self.form.trustees.len();
        GovernanceRecommendations {
            recommended_quorum: n.div_ceil(2),
            max_quorum: n,
            recommended_proposal_threshold: 1,
            max_proposal_threshold: n,
        }
    }

    // ── Wallet ──────────────────────────────────────────────────────────

    pub fn connect_wallet(&mut self, address: &str) -> Result<(), WizardError> {
        let wallet = WalletAddress::parse(address)?;
        tracing::info!(wallet = %wallet, "wallet connected");
        self.connected_wallet = Some(wallet);
        Ok(())
    }

    pub fn disconnect_wallet(&mut self) {
        self.connected_wallet = None;
    }

    pub fn connected_wallet(&self) -> Option<&WalletAddress> {
        self.connected_wallet.as_ref()
    }

    pub fn is_wallet_connected(&self) -> bool {
        self.connected_wallet.is_some()
    }

    /// Address bookkeeping over the current form and connected wallet.
    pub fn address_manager(&self) -> WalletAddressManager<'_> {
        WalletAddressManager::new(
            &self.form.trustees,
            &self.form.settings,
            self.connected_wallet.as_ref().map(WalletAddress::as_str),
        )
    }

    // ── Review & submission ─────────────────────────────────────────────

    pub fn review_summary(&self, hidden: bool) -> Vec<ReviewLine> {
        review_summary(&self.form, hidden)
    }

    /// Validate every step and package the form for deployment.
    pub fn prepare_submission(&self, now: NaiveDateTime) -> Result<TrustSubmission, WizardError> {
        let results = self.validator.validate_all_steps(
            &self.form.settings,
            &self.form.trustees,
            &self.form.governance,
            &self.form.deposit,
            now,
        );
        let invalid: Vec<_> = results
            .iter()
            .filter(|(_, v)| !v.is_valid)
            .map(|(kind, _)| *kind)
            .collect();
        if !invalid.is_empty() {
            tracing::debug!(?invalid, "submission blocked");
            return Err(WizardError::SubmissionBlocked(invalid));
        }

        let warnings = merge(results.into_values()).warnings;
        tracing::info!(trustees = self.form.trustees.len(), "submission prepared");
        Ok(TrustSubmission {
            form: self.form.clone(),
            connected_wallet: self.connected_wallet.clone(),
            prepared_at: now,
            warnings,
        })
    }

    /// Back to a blank form on the first step.
    pub fn reset(&mut self) {
        self.current = WizardStep::Settings;
        self.form = default_form_data();
        self.connected_wallet = None;
        self.last_trustee_id = 0;
    }
}
