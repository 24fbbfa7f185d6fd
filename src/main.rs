use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use horsefall::logging::{init_logging, LoggingConfig};
use horsefall::prelude::*;

/// Config file read from the working directory when present.
const DEFAULT_CONFIG: &str = "horsefall.toml";

/// Environment variable naming an explicit config file.
const CONFIG_ENV: &str = "HORSEFALL_CONFIG";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = load_config()?;
    let collide_world_bounds = config.main.collide_world_bounds;

    EngineBuilder::new()
        .with_config(config)
        .build()
        .init(|systems| {
            systems.states.add(MAIN_STATE, MainState::new(collide_world_bounds));
            systems.states.start(MAIN_STATE);
        })
        .run()
        .context("engine stopped")
}

fn load_config() -> Result<GameConfig> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
        info!("Loading config from {} ({})", path.display(), CONFIG_ENV);
        return GameConfig::load(&path)
            .with_context(|| format!("loading {} from {}", path.display(), CONFIG_ENV));
    }

    let path = PathBuf::from(DEFAULT_CONFIG);
    if path.is_file() {
        info!("Loading config from {}", path.display());
        return GameConfig::load(&path).with_context(|| format!("loading {}", path.display()));
    }

    info!("No config file, using defaults");
    Ok(GameConfig::default())
}
