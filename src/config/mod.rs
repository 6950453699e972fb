pub mod paths;
pub mod profile;
pub mod settings;

pub use paths::{AppPaths, breaking_app_version};
pub use profile::{DEFAULT_PROFILE, resolve_profile};
pub use settings::Settings;

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths) -> AppResult<Settings> {
    settings::load(paths.settings_file())
}

