use crate::error::ConfigError;
use dataset::DatasetSource;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section falls back to its defaults, so an empty or missing config file
/// yields a working setup on the built-in sample.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dataset: DatasetSettings,
    pub map: MapSettings,
    pub insights: InsightsSettings,
    pub server: ServerSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DatasetSourceKind {
    #[default]
    Sample,
    File,
}

/// Where the restaurant table is loaded from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    pub source: DatasetSourceKind,
    /// JSON file with an array of restaurant records. Required when `source = "file"`.
    pub path: Option<PathBuf>,
}

/// Initial viewport of the restaurant map.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub zoom: u8,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InsightsSettings {
    /// How many cities the "highest number of restaurants" list shows.
    pub top_cities: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub addr: SocketAddr,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---
// This allows a user to omit any section from their toml
// and still have it work with sensible defaults.

impl Default for MapSettings {
    fn default() -> Self {
        // Centered on India.
        Self {
            center_latitude: 20.5937,
            center_longitude: 78.9629,
            zoom: 5,
        }
    }
}

impl Default for InsightsSettings {
    fn default() -> Self {
        Self { top_cities: 5 }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl DatasetSettings {
    /// Resolves the configured source.
    pub fn source(&self) -> Result<DatasetSource, ConfigError> {
        match (self.source, &self.path) {
            (DatasetSourceKind::Sample, _) => Ok(DatasetSource::Sample),
            (DatasetSourceKind::File, Some(path)) => Ok(DatasetSource::File(path.clone())),
            (DatasetSourceKind::File, None) => Err(ConfigError::ValidationError(
                "dataset.path is required when dataset.source = \"file\"".to_string(),
            )),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dataset.source()?;

        let map = &self.map;
        if !(-90.0..=90.0).contains(&map.center_latitude) {
            return Err(ConfigError::ValidationError(format!(
                "map.center_latitude {} is outside [-90, 90]",
                map.center_latitude
            )));
        }
        if !(-180.0..=180.0).contains(&map.center_longitude) {
            return Err(ConfigError::ValidationError(format!(
                "map.center_longitude {} is outside [-180, 180]",
                map.center_longitude
            )));
        }
        if map.zoom > 18 {
            return Err(ConfigError::ValidationError(format!(
                "map.zoom {} is outside [0, 18]",
                map.zoom
            )));
        }

        if self.insights.top_cities == 0 {
            return Err(ConfigError::ValidationError(
                "insights.top_cities must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
