use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::error::{AppError, AppResult};

pub const LOG_FILE_NAME: &str = "shell-profiles.log";

pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Terminal logging at the requested verbosity plus an info-level file log for the profile.
///
/// A log directory that cannot be created only costs the file log.
pub fn init(verbose: u8, profile_log_dir: &Path) -> AppResult<()> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level_for_verbosity(verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    match open_log_file(profile_log_dir) {
        Ok(file) => {
            let config = ConfigBuilder::new().set_time_format_rfc3339().build();
            loggers.push(WriteLogger::new(LevelFilter::Info, config, file));
        }
        Err(err) => eprintln!("warning: file logging disabled: {err}"),
    }

    CombinedLogger::init(loggers).map_err(|err| AppError::Logging(err.to_string()))
}

pub fn log_file_path(profile_log_dir: &Path) -> PathBuf {
    profile_log_dir.join(LOG_FILE_NAME)
}

fn open_log_file(dir: &Path) -> AppResult<fs::File> {
    fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path(dir))?;
    Ok(file)
}
