use std::io::{Read, Write};

use super::{Manager, Outcome};
use crate::config::OnFailure;
use crate::env::Environment;
use crate::error::{Error, Result};
use crate::process::Runner;
use crate::prompt::confirm;
use crate::table::render_list;

impl<R: Runner, E: Environment> Manager<R, E> {
    /// `list-extensions`: print the installed extensions as a table.
    pub fn list_extensions(&self, out: &mut impl Write) -> Result<Vec<String>> {
        let extensions = self.editor.list_extensions()?;
        writeln!(out, "Installed extensions:")?;
        writeln!(out, "{}", render_list("Extension ID", &extensions))?;
        Ok(extensions)
    }

    /// `uninstall-all`: show what will be removed, confirm, then uninstall
    /// each extension in turn.
    ///
    /// Nothing is rolled back when an uninstall fails. With
    /// [`OnFailure::Stop`] the first failure ends the loop; with
    /// [`OnFailure::Continue`] the remaining extensions are still attempted
    /// and the failures are reported together at the end.
    pub fn uninstall_all(&self, input: &mut impl Read, out: &mut impl Write) -> Result<Outcome> {
        let extensions = self.editor.list_extensions()?;
        writeln!(out, "The following extensions will be uninstalled:")?;
        writeln!(out, "{}", render_list("Extensions to be uninstalled", &extensions))?;

        if !confirm("Are you sure you want to uninstall all extensions?", input, out)? {
            writeln!(out, "Operation cancelled.")?;
            return Ok(Outcome::Cancelled);
        }

        let mut failed = Vec::new();
        for ext in &extensions {
            writeln!(out, "Uninstalling {ext}...")?;
            match self.editor.uninstall(ext) {
                Ok(_) => {}
                Err(e) if self.on_failure() == OnFailure::Continue => {
                    log::warn!("uninstall of {ext} failed: {e}");
                    writeln!(out, "Failed to uninstall {ext}: {e}")?;
                    failed.push(ext.clone());
                }
                Err(e) => return Err(e),
            }
        }

        if failed.is_empty() {
            writeln!(out, "All extensions have been uninstalled.")?;
            Ok(Outcome::Done)
        } else {
            writeln!(out, "{} extension(s) could not be uninstalled.", failed.len())?;
            Err(Error::UninstallFailures { failed })
        }
    }

    /// `install-extension <id>`.
    pub fn install_extension(&self, id: &str, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Installing {id}...")?;
        self.editor.install(id)?;
        writeln!(out, "Extension {id} has been installed.")?;
        Ok(())
    }
}
