//! Manage a local VS Code installation: extensions, telemetry, settings
//! backups and cached workspace storage.

/// The manager's own TOML configuration.
pub mod config;
/// Driving the editor's command-line interface.
pub mod editor;
/// Environment variables and OS family, behind a trait.
pub mod env;
/// Error type shared by every operation.
pub mod error;
/// The user-facing operations.
pub mod manager;
/// Where the editor keeps its files.
pub mod paths;
/// Running external commands.
pub mod process;
/// Yes/no confirmation.
pub mod prompt;
/// Reading and writing `settings.json`.
pub mod settings;
/// Bordered text tables.
pub mod table;

pub use config::Config;
pub use env::{Environment, SystemEnvironment};
pub use error::{Error, Result};
pub use manager::{Manager, Outcome};
pub use paths::Paths;
pub use process::{Runner, ShellRunner};
