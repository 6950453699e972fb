use std::fmt;

use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::host::HostBridge;

use super::validation::{Validity, validate_new_profile};
use super::view::{NewProfileField, ProfileBadge, ProfileOption, ProfileView};

/// Lifecycle of one controller instance. `Loading` is what a front end shows until `load`
/// resolves; a successful restart ends the instance for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Loading,
    Ready,
    Submitting,
    Restarted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Loading => "loading",
            Phase::Ready => "ready",
            Phase::Submitting => "submitting",
            Phase::Restarted => "restarted",
        };
        f.write_str(name)
    }
}

/// Result of a flow that reached the restart call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowOutcome {
    pub profile: String,
}

/// Keeps the selection widget and new-profile form in sync with the host and sequences
/// "set active profile" then "restart" for both flows.
#[derive(Debug)]
pub struct ProfileController<B> {
    bridge: B,
    phase: Phase,
    active_profile: String,
    profiles: Vec<String>,
    selected: Option<usize>,
    new_profile: String,
    new_profile_validity: Validity,
    last_error: Option<String>,
}

impl<B: HostBridge> ProfileController<B> {
    /// Fetches the active profile, then the profile list, and lands in `Ready`.
    pub async fn load(bridge: B) -> AppResult<Self> {
        let active_profile = bridge.get_active_profile().await?;
        let profiles = bridge.get_existing_profiles().await?;
        log::debug!("loaded {} profiles, active `{active_profile}`", profiles.len());

        let selected = profiles
            .iter()
            .position(|profile| *profile == active_profile)
            .or_else(|| (!profiles.is_empty()).then_some(0));

        Ok(Self {
            bridge,
            phase: Phase::Ready,
            active_profile,
            profiles,
            selected,
            new_profile: String::new(),
            new_profile_validity: Validity::Valid,
            last_error: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_profile(&self) -> &str {
        &self.active_profile
    }

    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.map(|index| self.profiles[index].as_str())
    }

    pub fn new_profile_validity(&self) -> &Validity {
        &self.new_profile_validity
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn view(&self) -> ProfileView {
        let options = self
            .profiles
            .iter()
            .enumerate()
            .map(|(index, name)| ProfileOption {
                name: name.clone(),
                selected: self.selected == Some(index),
            })
            .collect();

        ProfileView {
            phase: self.phase,
            badge: ProfileBadge::new(self.active_profile.clone()),
            options,
            new_profile: NewProfileField {
                value: self.new_profile.clone(),
                validity: self.new_profile_validity.clone(),
            },
            last_error: self.last_error.clone(),
        }
    }

    /// Picks an option in the selection widget. Only listed profiles can be chosen.
    pub fn select(&mut self, profile: &str) -> AppResult<()> {
        let index = self
            .profiles
            .iter()
            .position(|candidate| candidate == profile)
            .ok_or_else(|| {
                AppError::InvalidInput(format!("profile `{profile}` is not in the list"))
            })?;
        self.selected = Some(index);
        Ok(())
    }

    pub async fn restart_selected(&mut self) -> AppResult<FlowOutcome> {
        self.ensure_ready()?;

        let target = self
            .selected()
            .map(str::to_string)
            .ok_or_else(|| AppError::InvalidInput("no profile selected".to_string()))?;

        self.switch_and_restart(target).await
    }

    /// Change handler of the new-profile field; re-validates on every edit.
    pub fn input_new_profile(&mut self, candidate: &str) -> &Validity {
        self.new_profile = candidate.to_string();
        self.new_profile_validity = validate_new_profile(&self.profiles, candidate);
        &self.new_profile_validity
    }

    pub async fn submit_new_profile(&mut self) -> AppResult<FlowOutcome> {
        self.ensure_ready()?;

        if let Validity::Invalid(message) = &self.new_profile_validity {
            return Err(AppError::Validation(message.clone()));
        }

        if self.new_profile.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "profile name cannot be empty".to_string(),
            ));
        }

        let target = self.new_profile.clone();
        self.switch_and_restart(target).await
    }

    async fn switch_and_restart(&mut self, target: String) -> AppResult<FlowOutcome> {
        self.phase = Phase::Submitting;
        self.last_error = None;

        if let Err(err) = self.bridge.set_active_profile(&target).await {
            return Err(self.fail(err));
        }

        if let Err(err) = self.bridge.restart().await {
            return Err(self.fail(err));
        }

        self.phase = Phase::Restarted;
        Ok(FlowOutcome { profile: target })
    }

    fn fail(&mut self, err: AppError) -> AppError {
        log::error!("profile switch failed: {err}");
        self.phase = Phase::Ready;
        self.last_error = Some(err.to_string());
        err
    }

    fn ensure_ready(&self) -> AppResult<()> {
        if self.phase != Phase::Ready {
            return Err(AppError::InvalidInput(format!(
                "cannot start a profile switch while {}",
                self.phase
            )));
        }
        Ok(())
    }
}
