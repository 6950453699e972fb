use std::path::PathBuf;

use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::host::{FileHost, Relaunch};
use crate::logging;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub paths: AppPaths,
    pub settings: Settings,
    pub host: FileHost,
    pub output: Output,
}

impl AppContext {
    pub async fn bootstrap(
        data_dir: Option<PathBuf>,
        json: bool,
        verbose: u8,
    ) -> AppResult<Self> {
        let paths = AppPaths::discover(data_dir.clone())?;
        let settings = config::load_settings(&paths)?;
        let default_profile =
            config::resolve_profile(&settings.default_profile, config::DEFAULT_PROFILE);
        let relaunch = relaunch_for(&settings, data_dir)?;
        let host = FileHost::new(
            paths.app_data_dir().to_path_buf(),
            default_profile,
            Some(relaunch),
        );

        let stored_profile = host.read_active_profile();
        let log_profile = log_profile_for(&stored_profile, host.default_profile());
        logging::init(verbose, &paths.profile_log_dir(&log_profile))?;
        if let Err(err) = &stored_profile {
            log::error!("failed to read active profile from file: {err}; using `{log_profile}`");
        }
        log::debug!("config directory: {}", paths.config_dir().display());
        log::debug!("app data directory: {}", host.app_data_dir().display());

        let output = Output::new(json);

        Ok(Self {
            paths,
            settings,
            host,
            output,
        })
    }
}

/// The profile whose log file receives this run's output; unreadable state counts as the default.
fn log_profile_for(stored: &AppResult<Option<String>>, default_profile: &str) -> String {
    match stored {
        Ok(Some(profile)) => profile.clone(),
        Ok(None) | Err(_) => default_profile.to_string(),
    }
}

fn relaunch_for(settings: &Settings, data_dir: Option<PathBuf>) -> AppResult<Relaunch> {
    let mut args = settings.relaunch_args.clone();
    // The relaunched process must see the same data directory override.
    if let Some(dir) = data_dir {
        args.push("--data-dir".to_string());
        args.push(dir.to_string_lossy().to_string());
    }

    match &settings.relaunch_program {
        Some(program) => Ok(Relaunch::new(program.clone(), args)),
        None => Relaunch::current_exe(args),
    }
}
