//! `scoped-log`: inspect logger level configuration.
//!
//! Loads a TOML config, registers the scopes it names and prints the
//! resulting loggers, or checks a level directive string.

use std::path::PathBuf;
use clap::{Parser, Subcommand};
use serde::Serialize;

use scoped_log::config::{load_config, RegistryConfig};
use scoped_log::{LevelConfig, LogLevel, Registry};

#[derive(Parser)]
#[command(name = "scoped-log")]
#[command(about = "Inspect and validate scoped logger levels", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the configured scopes and their effective levels
    Levels,
    /// Parse a level string such as "info,http:debug"
    Check {
        directives: String,
    },
    /// Apply a level string on top of the configuration and list the result
    Apply {
        directives: String,
    },
}

#[derive(Serialize)]
struct LoggerView<'a> {
    name: &'a str,
    description: &'a str,
    level: LogLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RegistryConfig::default(),
    };
    scoped_log::observability::init_logging(&config.logging)?;

    match cli.command {
        Commands::Levels => {
            let registry = registry_for(&config, config.logging.level_config());
            println!("{}", render_loggers(&registry)?);
        }
        Commands::Check { directives } => {
            let levels: LevelConfig = directives.parse()?;
            println!("{}", serde_json::to_string_pretty(&levels)?);
        }
        Commands::Apply { directives } => {
            let mut levels = config.logging.level_config();
            levels.apply_directives(&directives)?;
            let registry = registry_for(&config, levels);
            println!("{}", render_loggers(&registry)?);
        }
    }

    Ok(())
}

/// A registry holding one logger per scope named in the config or in `levels`.
fn registry_for(config: &RegistryConfig, levels: LevelConfig) -> Registry {
    let registry = Registry::new().with_levels(levels.clone());
    for name in config.logging.scopes.keys().chain(levels.scopes.keys()) {
        registry.register(name, "declared in configuration");
    }
    registry
}

/// Pretty JSON listing of every logger, sorted by name.
fn render_loggers(registry: &Registry) -> Result<String, serde_json::Error> {
    let mut loggers = registry.loggers();
    loggers.sort_by(|a, b| a.name().cmp(b.name()));

    let views: Vec<_> = loggers
        .iter()
        .map(|l| LoggerView {
            name: l.name(),
            description: l.description(),
            level: l.level(),
        })
        .collect();
    serde_json::to_string_pretty(&views)
}
