use std::fs;
use std::path::{Path, PathBuf};

use semver::Version;

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "shell-profiles";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    app_data_dir: PathBuf,
    log_dir: PathBuf,
}

impl AppPaths {
    pub fn discover(data_dir_override: Option<PathBuf>) -> AppResult<Self> {
        let version = breaking_app_version(env!("CARGO_PKG_VERSION"))?;

        let (config_root, data_root) = match data_dir_override {
            Some(root) => (root.join("config"), root.join("data")),
            None => {
                let config_root = dirs::config_dir().ok_or_else(|| {
                    AppError::Config("unable to resolve config directory".to_string())
                })?;
                let data_root = dirs::data_dir().ok_or_else(|| {
                    AppError::Config("unable to resolve data directory".to_string())
                })?;
                (config_root.join(APP_DIR), data_root.join(APP_DIR))
            }
        };

        let paths = Self::from_roots(config_root, data_root, &version);
        fs::create_dir_all(&paths.config_dir)?;
        fs::create_dir_all(&paths.app_data_dir)?;

        Ok(paths)
    }

    /// Lays out the versioned directories below the given roots without touching the disk.
    pub fn from_roots(config_root: PathBuf, data_root: PathBuf, version: &str) -> Self {
        Self {
            config_dir: config_root.join(version),
            app_data_dir: data_root.join(version),
            log_dir: data_root.join("logs").join(version),
        }
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    pub fn profile_log_dir(&self, profile: &str) -> PathBuf {
        self.log_dir.join(profile)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn app_data_dir(&self) -> &Path {
        &self.app_data_dir
    }
}

/// Data written by one breaking version is never read by another:
/// `0.x.y` maps to `0.x`, anything from `1.0.0` up maps to its major number.
pub fn breaking_app_version(version: &str) -> AppResult<String> {
    let version = Version::parse(version)
        .map_err(|err| AppError::Config(format!("invalid app version `{version}`: {err}")))?;

    if version.major == 0 {
        Ok(format!("0.{}", version.minor))
    } else {
        Ok(version.major.to_string())
    }
}
