use config::{Config, Environment, File};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{Settings, SimulationSettings, TelemetrySettings};

/// Loads the application settings from layered sources.
///
/// 1. `config/base.toml`, if present.
/// 2. An environment-specific file (e.g. `config/development.toml`).
/// 3. Environment variables prefixed with `APP`, `__` separated
///    (e.g. `APP_SIMULATION__MAX_TERM_MONTHS=120`).
///
/// Every setting has a default, so the result is usable even when no
/// source supplies anything.
pub fn load_settings() -> Result<Settings> {
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let settings = Config::builder()
        .add_source(File::with_name("config/base").required(false))
        .add_source(File::with_name(&format!("config/{}", environment)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let settings: Settings = settings.try_deserialize()?;

    Ok(settings)
}
