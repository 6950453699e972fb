use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "shell-profiles",
    version,
    about = "Switch, create and restart into desktop shell profiles"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Use this directory instead of the platform config and data directories"
    )]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the active profile
    Show,
    /// List existing profiles in host order
    List,
    /// Select an existing profile and restart under it
    Switch(SwitchArgs),
    /// Create a new profile and restart under it
    Create(CreateArgs),
    /// Restart under the active profile
    Restart,
    /// Replay keyboard and wheel events through the zoom controller
    Zoom(ZoomArgs),
    /// Record a UI message in the active profile's log file
    Log(LogArgs),
    /// Show where the active profile's log file lives
    Logs,
}

#[derive(Debug, Args)]
pub struct LogArgs {
    #[arg(required = true, num_args = 1.., help = "Message words")]
    pub message: Vec<String>,
}

#[derive(Debug, Args)]
pub struct SwitchArgs {
    #[arg(help = "Existing profile name")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(help = "New profile name")]
    pub name: String,
    #[arg(long, help = "Network seed stored with the new profile")]
    pub network_seed: Option<String>,
}

#[derive(Debug, Args)]
pub struct ZoomArgs {
    #[arg(long, value_name = "PCT", help = "Rendered zoom to start from, e.g. 150%")]
    pub start: Option<String>,
    #[arg(
        value_name = "EVENT",
        allow_hyphen_values = true,
        help = "ctrl-down, ctrl-up, wheel:<deltaY>, key-down:<name>, key-up:<name>"
    )]
    pub events: Vec<String>,
}
