use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        json,
        verbose,
        data_dir,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(data_dir, json, verbose).await?;

    match command {
        Command::Show => commands::show::run(&ctx).await,
        Command::List => commands::list::run(&ctx).await,
        Command::Switch(args) => commands::switch::run(&ctx, args).await,
        Command::Create(args) => commands::create::run(&ctx, args).await,
        Command::Restart => commands::restart::run(&ctx).await,
        Command::Zoom(args) => commands::zoom::run(&ctx, args),
        Command::Log(args) => commands::ui_log::run(&ctx, args),
        Command::Logs => commands::logs::run(&ctx).await,
    }
}
