use serde::Serialize;

use crate::cli::LogArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

const UI_LOG_TAG: &str = "[shell-profiles UI]";

#[derive(Debug, Serialize)]
struct LogResult {
    line: String,
}

pub fn run(ctx: &AppContext, args: LogArgs) -> AppResult<()> {
    let line = ui_log_line(&args.message.join(" "))?;
    log::info!("{line}");

    ctx.output.emit("logged", &LogResult { line })
}

fn ui_log_line(message: &str) -> AppResult<String> {
    let message = message.trim();
    if message.is_empty() {
        return Err(AppError::InvalidInput(
            "log message cannot be empty".to_string(),
        ));
    }

    Ok(format!("{UI_LOG_TAG} {message}"))
}
