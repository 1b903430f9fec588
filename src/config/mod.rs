mod ops;

use serde::{Deserialize, Serialize};

/// Settings for the manager itself, stored in
/// `~/.config/vscode-manager/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which editor binary to drive.
    pub editor: EditorConfig,
    /// Behaviour of `uninstall-all`.
    pub uninstall: UninstallConfig,
    /// Confirmation prompts.
    pub prompt: PromptConfig,
}

/// `[editor]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor CLI, e.g. "code" or "codium". Probed on PATH when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// `[uninstall]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UninstallConfig {
    /// What to do when one uninstall in the loop fails.
    pub on_failure: OnFailure,
}

/// Failure policy for the sequential uninstall loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnFailure {
    /// Stop at the first failure. Extensions already removed stay removed.
    #[default]
    Stop,
    /// Report the failure and move on to the next extension.
    Continue,
}

/// `[prompt]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Also ask before reset-settings, clear-workspace-storage and
    /// restore-settings. Only uninstall-all asks by default.
    pub confirm_destructive: bool,
}

impl std::fmt::Display for OnFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stop => write!(f, "stop"),
            Self::Continue => write!(f, "continue"),
        }
    }
}

impl std::str::FromStr for OnFailure {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "stop" => Ok(Self::Stop),
            "continue" => Ok(Self::Continue),
            _ => anyhow::bail!("Invalid on_failure value: {s} (expected stop or continue)"),
        }
    }
}

#[cfg(test)]
mod tests;
