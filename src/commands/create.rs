use crate::cli::CreateArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::profiles::{ProfileController, Validity};

pub async fn run(ctx: &AppContext, args: CreateArgs) -> AppResult<()> {
    let mut controller = ProfileController::load(&ctx.host).await?;

    if let Validity::Invalid(message) = controller.input_new_profile(&args.name) {
        return Err(AppError::Validation(message.clone()));
    }

    ctx.host
        .set_profile_network_seed(&args.name, args.network_seed.as_deref())?;

    let outcome = controller.submit_new_profile().await?;
    let text = format!("{}: created, restarting", outcome.profile);
    ctx.output.emit(&text, &outcome)
}
