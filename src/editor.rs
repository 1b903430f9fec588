use crate::error::Result;
use crate::process::{shell_quote, CommandOutput, Runner};

/// Editor binaries probed on `PATH` when none is configured, in order.
pub const CANDIDATE_COMMANDS: &[&str] = &["code", "code-insiders", "codium", "cursor", "windsurf"];

/// Pick the editor CLI: the configured command, else the first candidate on
/// `PATH`, else `code`.
pub fn resolve_command(configured: Option<&str>) -> String {
    if let Some(cmd) = configured.filter(|c| !c.trim().is_empty()) {
        return cmd.to_string();
    }
    CANDIDATE_COMMANDS
        .iter()
        .copied()
        .find(|cmd| which::which(cmd).is_ok())
        .unwrap_or("code")
        .to_string()
}

/// Wraps the editor's command-line interface.
#[derive(Debug)]
pub struct EditorCli<R> {
    command: String,
    runner: R,
}

impl<R: Runner> EditorCli<R> {
    /// Drive the editor binary `command` through `runner`.
    pub fn new(command: impl Into<String>, runner: R) -> Self {
        Self {
            command: command.into(),
            runner,
        }
    }

    /// Installed extension identifiers, in the order the editor prints them.
    pub fn list_extensions(&self) -> Result<Vec<String>> {
        let line = format!("{} --list-extensions", self.command);
        let output = self.runner.run(&line)?.check(&line)?;
        Ok(parse_extension_list(&output.stdout))
    }

    /// Install one extension. A non-zero exit is an error.
    pub fn install(&self, id: &str) -> Result<CommandOutput> {
        let line = self.extension_line("--install-extension", id);
        self.runner.run(&line)?.check(&line)
    }

    /// Uninstall one extension. A non-zero exit is an error.
    pub fn uninstall(&self, id: &str) -> Result<CommandOutput> {
        let line = self.extension_line("--uninstall-extension", id);
        self.runner.run(&line)?.check(&line)
    }

    fn extension_line(&self, flag: &str, id: &str) -> String {
        format!("{} {flag} {}", self.command, shell_quote(id, self.runner.os()))
    }
}

/// Split `--list-extensions` output into identifiers, dropping blank lines.
pub fn parse_extension_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_blank_lines() {
        assert_eq!(
            parse_extension_list("foo.bar\nbaz.qux\n\n"),
            vec!["foo.bar".to_string(), "baz.qux".to_string()]
        );
        assert!(parse_extension_list("").is_empty());
    }

    #[test]
    fn test_parse_handles_crlf() {
        assert_eq!(parse_extension_list("a.b\r\nc.d\r\n"), vec!["a.b", "c.d"]);
    }

    #[test]
    fn test_configured_command_wins() {
        assert_eq!(resolve_command(Some("codium")), "codium");
    }

    #[test]
    fn test_blank_configured_command_is_ignored() {
        let cmd = resolve_command(Some("  "));
        assert!(CANDIDATE_COMMANDS.contains(&cmd.as_str()));
    }
}
