use std::path::PathBuf;
use std::process::Command;

use crate::error::{AppError, AppResult};

/// How the host brings itself back up after a restart request.
#[derive(Debug, Clone)]
pub struct Relaunch {
    program: PathBuf,
    args: Vec<String>,
}

impl Relaunch {
    pub fn new(program: PathBuf, args: Vec<String>) -> Self {
        Self { program, args }
    }

    pub fn current_exe(args: Vec<String>) -> AppResult<Self> {
        let program = std::env::current_exe().map_err(|err| {
            AppError::Bridge(format!("failed to resolve current executable path: {err}"))
        })?;
        Ok(Self::new(program, args))
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn spawn(&self) -> AppResult<()> {
        Command::new(&self.program)
            .args(&self.args)
            .spawn()
            .map_err(|err| {
                AppError::Bridge(format!(
                    "failed to relaunch {}: {err}",
                    self.program.display()
                ))
            })?;
        Ok(())
    }
}
