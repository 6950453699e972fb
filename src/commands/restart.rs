use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::host::HostBridge;

#[derive(Debug, Serialize)]
struct RestartResult {
    profile: String,
}

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let profile = ctx.host.get_active_profile().await?;
    ctx.host.restart().await?;

    let text = format!("{profile}: restarting");
    ctx.output.emit(&text, &RestartResult { profile })
}
