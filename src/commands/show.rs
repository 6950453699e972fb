use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::profiles::{ProfileBadge, ProfileController};

#[derive(Debug, Serialize)]
struct ShowResult {
    badge: ProfileBadge,
    has_network_seed: bool,
}

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let controller = ProfileController::load(&ctx.host).await?;
    let badge = controller.view().badge;
    let has_network_seed = ctx.host.read_profile_network_seed(&badge.text).is_some();

    let text = if has_network_seed {
        format!("{}: {} (custom network seed)", badge.label, badge.text)
    } else {
        format!("{}: {}", badge.label, badge.text)
    };
    ctx.output.emit(
        &text,
        &ShowResult {
            badge,
            has_network_seed,
        },
    )
}
