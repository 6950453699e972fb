use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::host::HostBridge;
use crate::logging;

#[derive(Debug, Serialize)]
struct LogsLocation {
    profile: String,
    log_file: String,
}

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let profile = ctx.host.get_active_profile().await?;
    let log_file = logging::log_file_path(&ctx.paths.profile_log_dir(&profile));
    let log_file = log_file.to_string_lossy().to_string();

    let location = LogsLocation {
        profile,
        log_file: log_file.clone(),
    };
    ctx.output.emit(&log_file, &location)
}
