use std::io;
use std::path::{Path, PathBuf};

/// Errors raised by the manager operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither `HOME` nor `USERPROFILE` is set.
    #[error("Unable to determine home directory (set HOME or USERPROFILE)")]
    MissingHomeDirectory,

    /// The command interpreter could not be started.
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        /// Command line that was being run.
        command: String,
        /// Underlying spawn error.
        source: io::Error,
    },

    /// An external command exited unsuccessfully.
    #[error("`{command}` failed with {}{}", describe_code(.code), describe_stderr(.stderr))]
    ExternalCommandFailure {
        /// Command line that failed.
        command: String,
        /// Exit code, `None` when the process was killed by a signal.
        code: Option<i32>,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// Some extensions could not be removed while continuing past failures.
    #[error("{} extension(s) could not be uninstalled: {}", .failed.len(), .failed.join(", "))]
    UninstallFailures {
        /// Identifiers whose uninstall failed.
        failed: Vec<String>,
    },

    /// The settings file is not valid JSON.
    #[error("Failed to parse settings at {}: {source}", .path.display())]
    SettingsParse {
        /// Settings file path.
        path: PathBuf,
        /// Parser error.
        source: serde_json::Error,
    },

    /// The settings file holds valid JSON that is not an object.
    #[error("Settings at {} is not a JSON object", .path.display())]
    SettingsNotObject {
        /// Settings file path.
        path: PathBuf,
    },

    /// A file or directory the operation needs does not exist.
    #[error("{} does not exist", .path.display())]
    FileNotFound {
        /// Missing path.
        path: PathBuf,
    },

    /// The operation lacks permission on a path.
    #[error("Permission denied: {}", .path.display())]
    PermissionDenied {
        /// Path that could not be accessed.
        path: PathBuf,
    },

    /// Any other filesystem failure.
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        /// What was being attempted, e.g. "write".
        action: &'static str,
        /// Path involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// A table row does not have as many cells as the header.
    #[error("Table row {row} has {found} cells, expected {expected}")]
    RaggedTable {
        /// Zero-based row index.
        row: usize,
        /// Header cell count.
        expected: usize,
        /// Cells found in the row.
        found: usize,
    },

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Output(#[from] io::Error),
}

/// Convenience alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Classify a filesystem error for `path`.
    pub fn from_io(action: &'static str, path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path: path.to_path_buf() },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path: path.to_path_buf() },
            _ => Self::Io {
                action,
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "no exit code".to_string(), |c| format!("exit code {c}"))
}

fn describe_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
