use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = shell_profiles::cli::Cli::parse();

    if let Err(err) = shell_profiles::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
