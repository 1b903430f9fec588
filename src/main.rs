//! `vscode-manager`: manage VS Code extensions and settings.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use commands::{
    config::{cmd_config, ConfigAction},
    manage::{cmd_manage, ManageCommand},
};

#[derive(Parser)]
#[command(
    name = "vscode-manager",
    version,
    about = "Manage VS Code extensions and settings"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Manage(ManageCommand),

    /// Manage vscode-manager's own configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        None => Cli::command().print_help()?,

        Some(Commands::Manage(command)) => cmd_manage(command)?,

        Some(Commands::Config { action }) => cmd_config(action)?,
    }

    Ok(())
}
