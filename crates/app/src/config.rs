use shared_types::AppConfig;
use std::sync::OnceLock;
use tracing::Level;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root. Embedded because the web build
/// has no file system to read it from at runtime.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parsed portal configuration. First call parses, later calls are free.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| parse_or_default(CONFIG_TOML))
}

fn parse_or_default(contents: &str) -> AppConfig {
    match AppConfig::from_toml_str(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "config.toml unreadable, using defaults");
            AppConfig::default()
        }
    }
}

/// Logger level from `[log] level`, falling back to `INFO`.
pub fn log_level(config: &AppConfig) -> Level {
    config.log.level.parse().unwrap_or(Level::INFO)
}
