//=========================================================================
// Logging
//=========================================================================
//
// `env_logger` backend for the `log` facade used throughout the crate.
// `RUST_LOG` wins over the configured default filter.
//
//=========================================================================

use env_logger::{Builder, Env, WriteStyle};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset, in `env_logger` syntax
    /// (e.g. "info", "horsefall=debug,winit=warn").
    pub default_filter: String,
    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            write_style: WriteStyle::Auto,
        }
    }
}

/// Installs the global logger. Returns `false` if one was already set.
pub fn init_logging(config: LoggingConfig) -> bool {
    Builder::from_env(Env::default().default_filter_or(config.default_filter))
        .write_style(config.write_style)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_ignored() {
        init_logging(LoggingConfig::default());
        assert!(!init_logging(LoggingConfig::default()));
    }
}
