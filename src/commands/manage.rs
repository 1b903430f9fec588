use anyhow::{Context, Result};
use clap::Subcommand;
use std::io::{self, Write};
use vscode_manager::{Config, Manager, Outcome, ShellRunner, SystemEnvironment};

#[derive(Subcommand)]
pub enum ManageCommand {
    /// List all installed extensions
    ListExtensions,
    /// Uninstall all extensions
    UninstallAll,
    /// Disable VS Code telemetry
    DisableTelemetry,
    /// Reset VS Code settings to default
    ResetSettings,
    /// Clear VS Code workspace storage
    ClearWorkspaceStorage,
    /// Install a specific extension
    InstallExtension {
        /// Extension identifier, e.g. publisher.name
        #[arg(value_name = "EXTENSION_ID")]
        extension_id: String,
    },
    /// Backup VS Code settings
    BackupSettings,
    /// List all user snippets
    ListUserSnippets,
    /// Restore VS Code settings from backup
    RestoreSettings,
}

impl ManageCommand {
    const fn name(&self) -> &'static str {
        match self {
            Self::ListExtensions => "list-extensions",
            Self::UninstallAll => "uninstall-all",
            Self::DisableTelemetry => "disable-telemetry",
            Self::ResetSettings => "reset-settings",
            Self::ClearWorkspaceStorage => "clear-workspace-storage",
            Self::InstallExtension { .. } => "install-extension",
            Self::BackupSettings => "backup-settings",
            Self::ListUserSnippets => "list-user-snippets",
            Self::RestoreSettings => "restore-settings",
        }
    }
}

pub fn cmd_manage(command: ManageCommand) -> Result<()> {
    let env = SystemEnvironment;
    let config = Config::load_or_default(&env)?;
    let manager = Manager::new(config, ShellRunner::new(), env);

    let name = command.name();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = match command {
        ManageCommand::ListExtensions => manager.list_extensions(&mut out).map(|_| Outcome::Done),
        ManageCommand::UninstallAll => manager.uninstall_all(&mut input, &mut out),
        ManageCommand::DisableTelemetry => manager.disable_telemetry(&mut out).map(|()| Outcome::Done),
        ManageCommand::ResetSettings => manager.reset_settings(&mut input, &mut out),
        ManageCommand::ClearWorkspaceStorage => manager.clear_workspace_storage(&mut input, &mut out),
        ManageCommand::InstallExtension { extension_id } => manager
            .install_extension(&extension_id, &mut out)
            .map(|()| Outcome::Done),
        ManageCommand::BackupSettings => manager.backup_settings(&mut out).map(|()| Outcome::Done),
        ManageCommand::ListUserSnippets => manager.list_user_snippets(&mut out).map(|_| Outcome::Done),
        ManageCommand::RestoreSettings => manager.restore_settings(&mut input, &mut out),
    };
    out.flush().ok();

    match outcome.with_context(|| format!("{name} failed"))? {
        Outcome::Done => log::debug!("{name} finished"),
        Outcome::Cancelled => log::debug!("{name} cancelled by user"),
    }
    Ok(())
}
