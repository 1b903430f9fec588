use std::fs;
use std::io::{Read, Write};

use super::{Manager, Outcome};
use crate::env::Environment;
use crate::error::{Error, Result};
use crate::process::Runner;
use crate::settings::{copy_file, write_atomic, Settings, EMPTY_SETTINGS, TELEMETRY_LEVEL_KEY};
use crate::table::render_list;

impl<R: Runner, E: Environment> Manager<R, E> {
    /// `disable-telemetry`: set `telemetry.telemetryLevel` to `"off"`.
    pub fn disable_telemetry(&self, out: &mut impl Write) -> Result<()> {
        let path = self.paths()?.settings;
        let mut settings = Settings::load(&path)?;
        settings.set(TELEMETRY_LEVEL_KEY, "off");
        settings.save(&path)?;
        writeln!(out, "VS Code telemetry has been disabled.")?;
        Ok(())
    }

    /// `reset-settings`: overwrite the settings file with `{}`.
    pub fn reset_settings(&self, input: &mut impl Read, out: &mut impl Write) -> Result<Outcome> {
        let path = self.paths()?.settings;
        writeln!(out, "Resetting {}", path.display())?;
        if !self.confirm_destructive("Reset all VS Code settings?", input, out)? {
            return Ok(Outcome::Cancelled);
        }
        write_atomic(&path, EMPTY_SETTINGS.as_bytes())?;
        writeln!(out, "VS Code settings have been reset to default.")?;
        Ok(Outcome::Done)
    }

    /// `clear-workspace-storage`: recursively delete the workspace storage
    /// directory. A missing directory is an error.
    pub fn clear_workspace_storage(
        &self,
        input: &mut impl Read,
        out: &mut impl Write,
    ) -> Result<Outcome> {
        let path = self.paths()?.workspace_storage;
        writeln!(out, "Removing {}", path.display())?;
        if !self.confirm_destructive("Delete all VS Code workspace storage?", input, out)? {
            return Ok(Outcome::Cancelled);
        }
        log::debug!("removing {} recursively", path.display());
        fs::remove_dir_all(&path).map_err(|e| Error::from_io("remove", &path, e))?;
        writeln!(out, "VS Code workspace storage has been cleared.")?;
        Ok(Outcome::Done)
    }

    /// `backup-settings`: copy the settings file to the backup path.
    pub fn backup_settings(&self, out: &mut impl Write) -> Result<()> {
        let paths = self.paths()?;
        copy_file(&paths.settings, &paths.backup)?;
        writeln!(out, "Settings backed up to {}", paths.backup.display())?;
        Ok(())
    }

    /// `restore-settings`: copy the backup over the settings file.
    pub fn restore_settings(&self, input: &mut impl Read, out: &mut impl Write) -> Result<Outcome> {
        let paths = self.paths()?;
        writeln!(
            out,
            "Overwriting {} with {}",
            paths.settings.display(),
            paths.backup.display()
        )?;
        if !self.confirm_destructive("Replace current VS Code settings with the backup?", input, out)? {
            return Ok(Outcome::Cancelled);
        }
        copy_file(&paths.backup, &paths.settings)?;
        writeln!(out, "Settings restored from {}", paths.backup.display())?;
        Ok(Outcome::Done)
    }

    /// `list-user-snippets`: print the snippet file names as a table.
    pub fn list_user_snippets(&self, out: &mut impl Write) -> Result<Vec<String>> {
        let dir = self.paths()?.snippets;
        let entries = fs::read_dir(&dir).map_err(|e| Error::from_io("read", &dir, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::from_io("read", &dir, e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        writeln!(out, "User snippets:")?;
        writeln!(out, "{}", render_list("Snippet Name", &names))?;
        Ok(names)
    }
}
