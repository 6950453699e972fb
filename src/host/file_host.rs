use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

use super::{HostBridge, Relaunch};

const ACTIVE_PROFILE_FILE: &str = ".activeProfile";
const NETWORK_SEED_FILE: &str = ".networkSeed";

/// Host bridge backed by the versioned app data directory.
///
/// Each profile owns one sub-directory; the active one is named in `.activeProfile`.
#[derive(Debug, Clone)]
pub struct FileHost {
    app_data_dir: PathBuf,
    default_profile: String,
    relaunch: Option<Relaunch>,
}

impl FileHost {
    pub fn new(app_data_dir: PathBuf, default_profile: String, relaunch: Option<Relaunch>) -> Self {
        Self {
            app_data_dir,
            default_profile,
            relaunch,
        }
    }

    pub fn app_data_dir(&self) -> &Path {
        &self.app_data_dir
    }

    pub fn profile_data_dir(&self, profile: &str) -> PathBuf {
        self.app_data_dir.join(profile)
    }

    /// Writes the network seed into the profile directory, creating the profile on the way.
    pub fn set_profile_network_seed(
        &self,
        profile: &str,
        network_seed: Option<&str>,
    ) -> AppResult<()> {
        check_profile_name(profile)?;

        if let Some(seed) = network_seed {
            let profile_dir = self.profile_data_dir(profile);
            fs::create_dir_all(&profile_dir)?;
            fs::write(profile_dir.join(NETWORK_SEED_FILE), seed)?;
            log::info!("stored network seed for profile `{profile}`");
        }

        Ok(())
    }

    pub fn read_profile_network_seed(&self, profile: &str) -> Option<String> {
        let path = self.profile_data_dir(profile).join(NETWORK_SEED_FILE);
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(&path) {
            Ok(seed) => Some(seed),
            Err(err) => {
                log::error!("failed to read network seed from {}: {err}", path.display());
                None
            }
        }
    }

    pub fn default_profile(&self) -> &str {
        &self.default_profile
    }

    /// Raw read of `.activeProfile` without falling back or logging.
    ///
    /// `Ok(None)` when no profile has been chosen yet.
    pub fn read_active_profile(&self) -> AppResult<Option<String>> {
        let path = self.active_profile_path();
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)?;
        let profile = raw.trim();
        if profile.is_empty() {
            return Ok(None);
        }

        Ok(Some(profile.to_string()))
    }

    fn active_profile_path(&self) -> PathBuf {
        self.app_data_dir.join(ACTIVE_PROFILE_FILE)
    }
}

impl HostBridge for FileHost {
    async fn get_active_profile(&self) -> AppResult<String> {
        match self.read_active_profile() {
            Ok(profile) => Ok(profile.unwrap_or_else(|| self.default_profile.clone())),
            Err(err) => {
                log::error!("failed to read active profile from file: {err}");
                Ok(self.default_profile.clone())
            }
        }
    }

    async fn get_existing_profiles(&self) -> AppResult<Vec<String>> {
        if !self.app_data_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.app_data_dir).map_err(|err| {
            AppError::Bridge(format!("failed to read app data directory: {err}"))
        })?;

        let mut profiles = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| {
                log::error!("got corrupted directory entry: {err}");
                AppError::Bridge(format!("failed to read directory entry: {err}"))
            })?;

            match entry.file_type() {
                Ok(file_type) if file_type.is_dir() => {
                    let name = entry.file_name().to_string_lossy().to_string();
                    // dot-directories can never be created as profiles
                    if !name.starts_with('.') {
                        profiles.push(name);
                    }
                }
                Ok(_) => {}
                Err(err) => log::error!("failed to get file type of {:?}: {err}", entry.path()),
            }
        }

        profiles.sort();
        log::debug!("found {} profiles", profiles.len());
        Ok(profiles)
    }

    async fn set_active_profile(&self, profile: &str) -> AppResult<()> {
        check_profile_name(profile)?;

        fs::create_dir_all(self.profile_data_dir(profile)).map_err(|err| {
            AppError::Bridge(format!("failed to create profile directory: {err}"))
        })?;
        fs::write(self.active_profile_path(), profile)
            .map_err(|err| AppError::Bridge(format!("failed to set active profile: {err}")))?;

        log::info!("active profile set to `{profile}`");
        Ok(())
    }

    async fn restart(&self) -> AppResult<()> {
        log::warn!("A restart of the app has been requested. Restarting...");

        match &self.relaunch {
            Some(relaunch) => {
                log::debug!(
                    "relaunching {} {:?}",
                    relaunch.program().display(),
                    relaunch.args()
                );
                relaunch.spawn()
            }
            None => {
                log::warn!("no relaunch command configured; the next start picks up the profile");
                Ok(())
            }
        }
    }
}

/// Profile names become directory names, so they must stay a single visible path segment.
fn check_profile_name(profile: &str) -> AppResult<()> {
    if profile.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "profile name cannot be empty".to_string(),
        ));
    }

    if profile.starts_with('.') || profile.contains(['/', '\\']) {
        return Err(AppError::InvalidInput(format!(
            "profile name `{profile}` must not start with '.' or contain path separators"
        )));
    }

    Ok(())
}
