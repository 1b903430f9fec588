use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Operating system family, which decides where the editor keeps its settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    /// Windows and friends; commands run through `cmd /c`.
    Windows,
    /// macOS.
    MacOs,
    /// Linux and every other Unix.
    Unix,
}

impl OsFamily {
    /// The family this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Unix
        }
    }
}

/// Source of environment variables and the OS family.
///
/// Everything that would otherwise read the process environment goes through
/// this trait so tests can supply fixed values.
pub trait Environment {
    /// Look up an environment variable.
    fn var(&self, name: &str) -> Option<String>;

    /// Operating system family.
    fn os(&self) -> OsFamily;

    /// Resolve the home directory from `HOME`, falling back to `USERPROFILE`.
    /// Empty values count as unset.
    fn home_dir(&self) -> Result<PathBuf> {
        ["HOME", "USERPROFILE"]
            .iter()
            .filter_map(|name| self.var(name))
            .find(|value| !value.is_empty())
            .map(PathBuf::from)
            .ok_or(Error::MissingHomeDirectory)
    }
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn os(&self) -> OsFamily {
        OsFamily::current()
    }
}

/// An in-memory environment with a fixed variable set.
#[derive(Debug, Clone)]
pub struct FixedEnvironment {
    vars: HashMap<String, String>,
    os: OsFamily,
}

impl FixedEnvironment {
    /// An empty environment for `os`.
    pub fn new(os: OsFamily) -> Self {
        Self {
            vars: HashMap::new(),
            os,
        }
    }

    /// An environment whose `HOME` is `home`.
    pub fn with_home(os: OsFamily, home: impl Into<PathBuf>) -> Self {
        let home: PathBuf = home.into();
        Self::new(os).set("HOME", home.to_string_lossy())
    }

    /// Set a variable, builder style.
    #[must_use]
    pub fn set(mut self, name: &str, value: impl Into<String>) -> Self {
        self.vars.insert(name.to_string(), value.into());
        self
    }
}

impl Environment for FixedEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn os(&self) -> OsFamily {
        self.os
    }
}
