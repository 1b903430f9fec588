mod extensions;
mod files;


use std::io::{Read, Write};

use crate::config::{Config, OnFailure};
use crate::editor::{resolve_command, EditorCli};
use crate::env::Environment;
use crate::error::Result;
use crate::paths::Paths;
use crate::process::Runner;
use crate::prompt::confirm;

/// How an operation ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation ran to completion.
    Done,
    /// The user declined the confirmation prompt; nothing was changed.
    Cancelled,
}

/// Runs the manager operations against one editor installation.
///
/// Every operation writes its status lines to the `out` it is given;
/// operations that may prompt read the answer from `input`.
#[derive(Debug)]
pub struct Manager<R, E> {
    editor: EditorCli<R>,
    env: E,
    config: Config,
}

impl<R: Runner, E: Environment> Manager<R, E> {
    /// Build a manager. The editor binary comes from `config`, or is probed
    /// on `PATH` when unset.
    pub fn new(config: Config, runner: R, env: E) -> Self {
        let command = resolve_command(config.editor.command.as_deref());
        log::debug!("using editor command `{command}`");
        Self {
            editor: EditorCli::new(command, runner),
            env,
            config,
        }
    }

    /// Resolve all paths for the current environment.
    pub fn paths(&self) -> Result<Paths> {
        Paths::resolve(&self.env)
    }

    const fn on_failure(&self) -> OnFailure {
        self.config.uninstall.on_failure
    }

    /// Ask before a destructive file operation, but only when the user opted
    /// in through `prompt.confirm_destructive`.
    fn confirm_destructive(
        &self,
        question: &str,
        input: &mut impl Read,
        out: &mut impl Write,
    ) -> Result<bool> {
        if !self.config.prompt.confirm_destructive {
            return Ok(true);
        }
        if confirm(question, input, out)? {
            Ok(true)
        } else {
            writeln!(out, "Operation cancelled.")?;
            Ok(false)
        }
    }
}
