use crate::cli::SwitchArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::profiles::ProfileController;

pub async fn run(ctx: &AppContext, args: SwitchArgs) -> AppResult<()> {
    let mut controller = ProfileController::load(&ctx.host).await?;
    controller.select(&args.name)?;

    let outcome = controller.restart_selected().await?;
    let text = format!("{}: restarting", outcome.profile);
    ctx.output.emit(&text, &outcome)
}
