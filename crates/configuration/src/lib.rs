use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    DatasetSettings, DatasetSourceKind, InsightsSettings, LoggingSettings, MapSettings,
    ServerSettings, Settings,
};

/// Prefix for environment overrides, e.g. `ATLAS_SERVER__ADDR=0.0.0.0:8080`.
pub const ENV_PREFIX: &str = "ATLAS";

/// Loads and validates the application configuration.
///
/// Callers that layer their own overrides on top (command-line flags) should use
/// [`load_settings`] and call [`Settings::validate`] once the overrides are in.
pub fn load_config(path: &Path) -> Result<Settings, ConfigError> {
    let settings = load_settings(path)?;
    settings.validate()?;
    Ok(settings)
}

/// Reads the configuration sources without validating the result.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file at `path`
/// (optional; a missing file is not an error), then `ATLAS_`-prefixed
/// environment variables using `__` as the section separator. A `.env` file in
/// the working directory is read into the environment first.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    dotenvy::dotenv().ok();

    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    Ok(settings)
}
