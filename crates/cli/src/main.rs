mod admin;
mod input;
mod member;
mod menu;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ludoteca_core::{
    load_catalog, load_config, validate_config, Config, ConfigError, Library,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Console front end for the board game library.
#[derive(Debug, Parser)]
#[command(name = "ludoteca", version = VERSION)]
struct Args {
    /// Path to the TOML config file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Catalog data file, overriding the configured one.
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Load configuration; a missing file just means defaults.
    let config = match load_config(&args.config) {
        Ok(config) => {
            info!("Configuration loaded from {:?}", args.config);
            config
        }
        Err(ConfigError::FileNotFound(_)) => {
            info!("No config file at {:?}, using defaults", args.config);
            Config::default()
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to load config from {:?}", args.config))
        }
    };
    validate_config(&config).context("Configuration validation failed")?;

    let data_file = args.data.unwrap_or(config.library.data_file.clone());

    let mut library = Library::new(config.library.max_games, config.library.max_members);

    // Seed the catalog from the data file when there is one.
    if data_file.exists() {
        let games = load_catalog(&data_file)
            .with_context(|| format!("Failed to read catalog from {:?}", data_file))?;
        for game in games {
            let id = game.id.clone();
            if let Err(e) = library.add_game(game) {
                warn!(game = %id, "skipping catalog entry: {}", e);
            }
        }
        info!(
            games = library.catalog().len(),
            "catalog loaded from {:?}", data_file
        );
    } else {
        warn!("No catalog file at {:?}, starting empty", data_file);
    }

    println!("Ludoteca {} - {} games in the catalog.", VERSION, library.catalog().len());
    menu::run(&mut library, &data_file);

    Ok(())
}
