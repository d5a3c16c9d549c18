//! FormKit CLI
//!
//! Command-line consumer of FormKit form schemas.
//!
//! # Usage
//!
//! ```bash
//! formkit kinds 2
//! formkit check signup.json
//! formkit --format yaml show signup.json
//! formkit lookup signup.json email
//! formkit migrate signup.json --to 2 --output signup.v2.yaml
//! formkit config set schema_version 1
//! ```

use clap::{Parser, Subcommand};
use formkit_schema::SchemaVersion;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "formkit")]
#[command(author = "FormKit")]
#[command(version)]
#[command(about = "FormKit Command Line Interface", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, short)]
    format: Option<output::OutputFormat>,

    /// Profile name from config file
    #[arg(long, short)]
    profile: Option<String>,

    /// Schema version for files that neither declare nor imply one
    #[arg(long, env = "FORMKIT_SCHEMA_VERSION")]
    schema_version: Option<SchemaVersion>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List field kinds
    Kinds {
        /// Only this schema version
        #[arg(value_name = "VERSION")]
        schema: Option<SchemaVersion>,
    },
    /// Validate a form file
    Check { file: PathBuf },
    /// Print the fields of a form file
    Show { file: PathBuf },
    /// Find a field by id
    Lookup { file: PathBuf, id: String },
    /// Convert a form file to another schema version
    Migrate {
        file: PathBuf,
        #[arg(long)]
        to: SchemaVersion,
        /// Destination file; format follows its extension
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

fn init_tracing(config_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_level.unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = config::Config::load(cli.profile.as_deref()).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring config: {e:#}");
        config::Config::default()
    });
    init_tracing(config.log_level.as_deref());

    let ctx = commands::Context {
        format: cli
            .format
            .or(config.default_format)
            .unwrap_or(output::OutputFormat::Table),
        fallback: cli
            .schema_version
            .or(config.schema_version)
            .unwrap_or(SchemaVersion::LATEST),
    };
    tracing::debug!(?ctx, "resolved settings");

    let result = match cli.command {
        Commands::Kinds { schema } => commands::kinds::handle(schema, &ctx),
        Commands::Check { file } => commands::check::handle(&file, &ctx),
        Commands::Show { file } => commands::show::handle(&file, &ctx),
        Commands::Lookup { file, id } => commands::lookup::handle(&file, &id, &ctx),
        Commands::Migrate { file, to, output } => {
            commands::migrate::handle(&file, to, output.as_deref(), &ctx)
        }
        Commands::Config { action } => commands::config::handle(action, cli.profile.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_migrate() {
        let cli = Cli::try_parse_from([
            "formkit", "--format", "yaml", "migrate", "form.json", "--to", "v2", "-o", "out.yml",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(output::OutputFormat::Yaml));
        match cli.command {
            Commands::Migrate { file, to, output } => {
                assert_eq!(file, PathBuf::from("form.json"));
                assert_eq!(to, SchemaVersion::V2);
                assert_eq!(output, Some(PathBuf::from("out.yml")));
            }
            _ => panic!("expected migrate"),
        }
    }

    #[test]
    fn test_rejects_unknown_version() {
        assert!(Cli::try_parse_from(["formkit", "kinds", "9"]).is_err());
    }
}
