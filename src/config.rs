//=========================================================================
// Game Configuration
//=========================================================================
//
// Optional TOML file overriding the built-in game settings.
//
// Every field has a default, so an empty file (or no file) reproduces the
// stock game: a 400x490 viewport mounted at "game_div", auto renderer,
// 60 ticks per second, assets resolved from the working directory.
//
// Example:
// ```toml
// width = 400
// height = 490
// parent = "game_div"
// renderer = "auto"        # auto | software | accelerated
// tps = 60.0
// asset_root = "."
//
// [main]
// collide_world_bounds = false
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Accepted range for [`GameConfig::tps`].
pub const MIN_TPS: f64 = 1.0;
pub const MAX_TPS: f64 = 1000.0;

//=== Renderer ============================================================

/// Renderer preference handed to the platform layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Renderer {
    /// Let the platform pick, preferring an accelerated backend.
    #[default]
    Auto,
    Software,
    Accelerated,
}

//=== ConfigError =========================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

//=== MainStateConfig =====================================================

/// Settings for the `"main"` game state.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MainStateConfig {
    /// Enables world-bound collision on the horse.
    ///
    /// Off by default: the stock game assigns the flag to an unbound name
    /// instead of the horse's body, so the horse never collides.
    pub collide_world_bounds: bool,
}

//=== GameConfig ==========================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Viewport width in logical pixels.
    pub width: u32,
    /// Viewport height in logical pixels.
    pub height: u32,
    /// Mount point id. Used as the window title on native targets.
    pub parent: String,
    pub renderer: Renderer,
    /// Logic ticks per second.
    pub tps: f64,
    /// Directory that relative asset paths are resolved against.
    pub asset_root: PathBuf,
    pub main: MainStateConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 490,
            parent: "game_div".to_string(),
            renderer: Renderer::Auto,
            tps: 60.0,
            asset_root: PathBuf::from("."),
            main: MainStateConfig::default(),
        }
    }
}

impl GameConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses and validates TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !(MIN_TPS..=MAX_TPS).contains(&self.tps) {
            return Err(ConfigError::Invalid(format!(
                "tps must be within {}..={}, got {}",
                MIN_TPS, MAX_TPS, self.tps
            )));
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_game() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (400, 490));
        assert_eq!(config.parent, "game_div");
        assert_eq!(config.renderer, Renderer::Auto);
        assert_eq!(config.tps, 60.0);
        assert!(!config.main.collide_world_bounds);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = GameConfig::from_toml_str(
            r#"
            renderer = "software"
            tps = 30.0

            [main]
            collide_world_bounds = true
            "#,
        )
        .unwrap();

        assert_eq!(config.renderer, Renderer::Software);
        assert_eq!(config.tps, 30.0);
        assert!(config.main.collide_world_bounds);
        assert_eq!(config.width, 400);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = GameConfig::from_toml_str("widht = 10").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_viewport_is_invalid() {
        let err = GameConfig::from_toml_str("width = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn non_positive_tps_is_invalid() {
        let err = GameConfig::from_toml_str("tps = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn tps_outside_range_is_invalid() {
        for text in ["tps = 1e-20", "tps = 0.5", "tps = 1000.5", "tps = inf", "tps = nan"] {
            let err = GameConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{text} accepted");
        }
    }

    #[test]
    fn tps_range_bounds_are_valid() {
        assert_eq!(GameConfig::from_toml_str("tps = 1.0").unwrap().tps, MIN_TPS);
        assert_eq!(GameConfig::from_toml_str("tps = 1000.0").unwrap().tps, MAX_TPS);
    }

    #[test]
    fn load_reads_file() {
        let dir = crate::test_support::fixture_dir("config-load");
        let path = dir.join("horsefall.toml");
        std::fs::write(&path, "parent = \"stage\"\n").unwrap();

        let config = GameConfig::load(&path).unwrap();

        assert_eq!(config.parent, "stage");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = crate::test_support::fixture_dir("config-missing");
        let err = GameConfig::load(dir.join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
