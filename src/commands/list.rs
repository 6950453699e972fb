use crate::context::AppContext;
use crate::error::AppResult;
use crate::profiles::{ProfileController, ProfileView};

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let controller = ProfileController::load(&ctx.host).await?;
    let view = controller.view();

    ctx.output.emit_lines(&format_options(&view), &view)
}

fn format_options(view: &ProfileView) -> Vec<String> {
    if view.options.is_empty() {
        return vec!["0 profiles".to_string()];
    }

    view.options
        .iter()
        .map(|option| {
            if option.name == view.badge.text {
                format!("* {}", option.name)
            } else {
                format!("  {}", option.name)
            }
        })
        .collect()
}
