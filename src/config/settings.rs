use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::zoom::DEFAULT_ZOOM_STEP;

use super::profile::DEFAULT_PROFILE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,
    #[serde(default = "default_profile")]
    pub default_profile: String,
    /// Program started on restart; the running executable when unset.
    #[serde(default)]
    pub relaunch_program: Option<PathBuf>,
    #[serde(default = "default_relaunch_args")]
    pub relaunch_args: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            zoom_step: default_zoom_step(),
            default_profile: default_profile(),
            relaunch_program: None,
            relaunch_args: default_relaunch_args(),
        }
    }
}

fn default_zoom_step() -> f64 {
    DEFAULT_ZOOM_STEP
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

fn default_relaunch_args() -> Vec<String> {
    vec!["show".to_string()]
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}
