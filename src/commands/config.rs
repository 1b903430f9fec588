use anyhow::Result;
use clap::Subcommand;
use vscode_manager::{config::Config, SystemEnvironment};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration to disk
    Init,
    /// Set a configuration value (e.g. uninstall.on_failure continue)
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    let env = SystemEnvironment;
    match action {
        ConfigAction::Show => {
            let config = Config::load(&env)?;
            let pretty = toml::to_string_pretty(&config)?;
            print!("{pretty}");
        }
        ConfigAction::Path => {
            let path = Config::path(&env)?;
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let config = Config::default();
            config.save(&env)?;
            println!("Wrote default config to {}", Config::path(&env)?.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(&env)?;
            config.set_value(&key, &value)?;
            config.save(&env)?;
            println!("Set {key} = {value}");
        }
        ConfigAction::Get { key } => {
            let config = Config::load(&env)?;
            println!("{}", config.get_value(&key)?);
        }
    }
    Ok(())
}
