use std::process::Command;

use crate::env::OsFamily;
use crate::error::{Error, Result};

/// Captured result of an external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    /// Standard output, trimmed.
    pub stdout: String,
    /// Standard error, trimmed.
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run that printed `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed run with exit code `code`.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// True when the command exited with status zero.
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }

    /// Turn a non-zero exit into [`Error::ExternalCommandFailure`].
    pub fn check(self, command: &str) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(Error::ExternalCommandFailure {
                command: command.to_string(),
                code: self.code,
                stderr: self.stderr,
            })
        }
    }
}

/// Something that runs shell command lines.
pub trait Runner {
    /// Run `command_line` to completion and capture its output. Only a
    /// failure to start the interpreter is an error; exit status is reported
    /// in the returned [`CommandOutput`].
    fn run(&self, command_line: &str) -> Result<CommandOutput>;

    /// OS family whose shell interprets the command lines.
    fn os(&self) -> OsFamily;
}

impl<T: Runner + ?Sized> Runner for &T {
    fn run(&self, command_line: &str) -> Result<CommandOutput> {
        (**self).run(command_line)
    }

    fn os(&self) -> OsFamily {
        (**self).os()
    }
}

/// Runs command lines through the platform shell: `cmd /c` on Windows,
/// `sh -c` elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct ShellRunner {
    os: OsFamily,
}

impl ShellRunner {
    /// A runner for the platform this binary was built for.
    pub const fn new() -> Self {
        Self {
            os: OsFamily::current(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner for ShellRunner {
    fn run(&self, command_line: &str) -> Result<CommandOutput> {
        let (shell, flag) = match self.os {
            OsFamily::Windows => ("cmd", "/c"),
            OsFamily::MacOs | OsFamily::Unix => ("sh", "-c"),
        };
        log::debug!("running `{shell} {flag} {command_line}`");

        let output = Command::new(shell)
            .arg(flag)
            .arg(command_line)
            .output()
            .map_err(|source| Error::Spawn {
                command: command_line.to_string(),
                source,
            })?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        };
        log::debug!("`{command_line}` exited with {:?}", result.code);
        Ok(result)
    }

    fn os(&self) -> OsFamily {
        self.os
    }
}

/// Quote `arg` for interpolation into a command line for `os`.
///
/// Arguments made only of `[A-Za-z0-9._@+-]` are returned unchanged.
///
/// On Windows the argument is wrapped in double quotes, which stops `&`, `|`
/// and `<>` but not `cmd`'s `%VAR%` expansion: `cmd /c` has no escape for `%`
/// inside quotes. Extension ids never contain `%`, so the editor rejects any
/// id that reaches it expanded.
pub fn shell_quote(arg: &str, os: OsFamily) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '@' | '+' | '-'));
    if plain {
        return arg.to_string();
    }
    match os {
        OsFamily::Windows => format!("\"{}\"", arg.replace('"', "\"\"")),
        OsFamily::MacOs | OsFamily::Unix => format!("'{}'", arg.replace('\'', "'\\''")),
    }
}
