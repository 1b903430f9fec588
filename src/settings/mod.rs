use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Error, Result};

#[cfg(test)]
mod tests;

/// Key that controls the editor's telemetry level.
pub const TELEMETRY_LEVEL_KEY: &str = "telemetry.telemetryLevel";

/// The editor's `settings.json`: a JSON object keyed by setting name.
///
/// Keys keep their file order and unknown keys are written back untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    values: Map<String, Value>,
}

impl Settings {
    /// An empty document, serialized as `{}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from JSON text. `path` is only used in errors.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        match value {
            Value::Object(values) => Ok(Self { values }),
            _ => Err(Error::SettingsNotObject {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Read and parse the whole file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::from_io("read", path, e))?;
        Self::parse(&text, path)
    }

    /// Overwrite `path` with the pretty-printed document (two-space indent).
    pub fn save(&self, path: &Path) -> Result<()> {
        write_atomic(path, self.to_pretty_json().as_bytes())
    }

    /// Pretty JSON text of the whole document.
    pub fn to_pretty_json(&self) -> String {
        // A map of `Value`s always serializes.
        serde_json::to_string_pretty(&self.values).unwrap_or_else(|_| "{}".to_string())
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set a top-level key, returning the previous value.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.to_string(), value.into())
    }

    /// Copy every key of `other` into this document. Existing keys are
    /// overwritten in place, new keys are appended.
    pub fn merge(&mut self, other: Self) {
        for (key, value) in other.values {
            self.values.insert(key, value);
        }
    }
}

/// Literal content written by `reset-settings`.
pub const EMPTY_SETTINGS: &str = "{}";

/// Replace the file at `path` with `contents` as a whole.
///
/// The bytes go to a sibling temp file first and are renamed over `path`, so
/// readers see either the old document or the new one. A symlinked `path` is
/// followed: the link stays and its target is replaced, keeping the target's
/// permissions.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(Error::from_io("resolve", path, e)),
    };
    let permissions = fs::metadata(&target).ok().map(|m| m.permissions());

    let tmp = temp_sibling(&target);
    log::debug!("writing {} bytes to {}", contents.len(), target.display());
    if let Err(e) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::from_io("write", path, e));
    }
    if let Some(permissions) = permissions {
        if let Err(e) = fs::set_permissions(&tmp, permissions) {
            let _ = fs::remove_file(&tmp);
            return Err(Error::from_io("write", path, e));
        }
    }
    fs::rename(&tmp, &target).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        Error::from_io("replace", path, e)
    })
}

/// Copy `from` to `to` byte for byte.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let bytes = fs::read(from).map_err(|e| Error::from_io("read", from, e))?;
    log::debug!("copying {} to {}", from.display(), to.display());
    write_atomic(to, &bytes)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}
