//! Config commands

use anyhow::{anyhow, bail, Result};
use clap::ValueEnum;
use formkit_schema::SchemaVersion;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;
use crate::ConfigCommands;

const KEYS: [&str; 3] = ["default_format", "schema_version", "log_level"];

pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "default_format" => {
            config.default_format =
                Some(OutputFormat::from_str(value, true).map_err(|e| anyhow!(e))?)
        }
        "schema_version" => config.schema_version = Some(value.parse::<SchemaVersion>()?),
        "log_level" => {
            EnvFilter::try_new(value)?;
            config.log_level = Some(value.to_string());
        }
        _ => bail!("Unknown config key: {}", key),
    }
    Ok(())
}

pub fn get(config: &Config, key: &str) -> Result<Option<String>> {
    Ok(match key {
        "default_format" => config
            .default_format
            .and_then(|f| f.to_possible_value())
            .map(|v| v.get_name().to_string()),
        "schema_version" => config.schema_version.map(|v| v.number().to_string()),
        "log_level" => config.log_level.clone(),
        _ => bail!("Unknown config key: {}", key),
    })
}

pub fn handle(action: ConfigCommands, profile: Option<&str>) -> Result<()> {
    match action {
        ConfigCommands::Init => {
            let path = Config::default().save(profile)?;
            println!("Configuration initialized at {}", path.display());
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load(profile)?;
            set(&mut config, &key, &value)?;
            config.save(profile)?;
            println!("Set {} successfully", key);
        }
        ConfigCommands::Get { key } => {
            let config = Config::load(profile)?;
            let value = get(&config, &key)?;
            println!("{}: {}", key, value.unwrap_or_else(|| "(not set)".into()));
        }
        ConfigCommands::List => {
            let config = Config::load(profile)?;
            for key in KEYS {
                let value = get(&config, key)?;
                println!("{}: {}", key, value.unwrap_or_else(|| "(not set)".into()));
            }
        }
    }
    Ok(())
}
