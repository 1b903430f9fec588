use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;
use crate::env::Environment;
use crate::error::Error;
use crate::paths::Paths;

impl Config {
    /// Location of the config file for the home directory in `env`.
    pub fn path(env: &dyn Environment) -> Result<PathBuf> {
        Ok(Paths::resolve(env)?.config)
    }

    /// Load the config for `env`, falling back to defaults when absent.
    pub fn load(env: &dyn Environment) -> Result<Self> {
        Self::load_from(&Self::path(env)?)
    }

    /// Like [`Config::load`], but with no home directory there is no config
    /// file either, so the defaults apply. Commands that need the home
    /// directory report it missing themselves.
    pub fn load_or_default(env: &dyn Environment) -> Result<Self> {
        match env.home_dir() {
            Ok(_) => Self::load(env),
            Err(Error::MissingHomeDirectory) => {
                log::debug!("no home directory, using default config");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load the config at `path`, falling back to defaults when absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write the config for `env`.
    pub fn save(&self, env: &dyn Environment) -> Result<()> {
        self.save_to(&Self::path(env)?)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get a config value by dot-separated key path
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "editor.command" => Ok(self.editor.command.clone().unwrap_or_default()),
            "uninstall.on_failure" => Ok(self.uninstall.on_failure.to_string()),
            "prompt.confirm_destructive" => Ok(self.prompt.confirm_destructive.to_string()),
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "editor.command" => {
                self.editor.command = if value.is_empty() { None } else { Some(value.to_string()) };
            }
            "uninstall.on_failure" => {
                self.uninstall.on_failure = value.parse()?;
            }
            "prompt.confirm_destructive" => {
                self.prompt.confirm_destructive = value.parse::<bool>()
                    .with_context(|| format!("Invalid boolean value: {value}"))?;
            }
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}
