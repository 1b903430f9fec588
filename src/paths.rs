use std::path::{Path, PathBuf};

use crate::env::{Environment, OsFamily};
use crate::error::Result;

const BACKUP_FILE_NAME: &str = "vscode_settings_backup.json";

/// Filesystem locations the manager reads and writes.
///
/// Resolution is pure path joining: nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// The user's home directory.
    pub home: PathBuf,
    /// The editor's `settings.json`.
    pub settings: PathBuf,
    /// Per-project cache directory.
    pub workspace_storage: PathBuf,
    /// User snippets directory.
    pub snippets: PathBuf,
    /// Where `backup-settings` copies the settings file.
    pub backup: PathBuf,
    /// This tool's own configuration file.
    pub config: PathBuf,
}

impl Paths {
    /// Resolve every path from the home directory and OS family of `env`.
    pub fn resolve(env: &dyn Environment) -> Result<Self> {
        let home = env.home_dir()?;
        Ok(Self::for_home(home, env.os()))
    }

    /// Build the paths for a known home directory.
    pub fn for_home(home: PathBuf, os: OsFamily) -> Self {
        // Only settings.json follows the OS; storage and snippets use the
        // Linux layout everywhere.
        let unix_user_dir = home.join(".config").join("Code").join("User");
        Self {
            settings: settings_dir(&home, os).join("settings.json"),
            workspace_storage: unix_user_dir.join("workspaceStorage"),
            snippets: unix_user_dir.join("snippets"),
            backup: home.join(BACKUP_FILE_NAME),
            config: home.join(".config").join("vscode-manager").join("config.toml"),
            home,
        }
    }
}

fn settings_dir(home: &Path, os: OsFamily) -> PathBuf {
    match os {
        OsFamily::Windows => home.join("AppData").join("Roaming"),
        OsFamily::MacOs => home.join("Library").join("Application Support"),
        OsFamily::Unix => home.join(".config"),
    }
    .join("Code")
    .join("User")
}
