use crate::error::DatasetError;
use crate::store::RestaurantDataset;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// Where the restaurant table comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatasetSource {
    /// The eleven built-in sample restaurants.
    #[default]
    Sample,
    /// A JSON array of restaurant records on disk.
    File(PathBuf),
}

impl DatasetSource {
    pub fn load(&self) -> Result<RestaurantDataset, DatasetError> {
        match self {
            DatasetSource::Sample => Ok(RestaurantDataset::sample()),
            DatasetSource::File(path) => RestaurantDataset::from_json_file(path),
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Sample => write!(f, "built-in sample"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Memoizes the dataset for the lifetime of the process.
///
/// The first successful load is kept and every later call hands out the same
/// `Arc`. A failed load stores nothing, so the next call tries again. There is
/// no eviction.
#[derive(Debug, Default)]
pub struct DatasetCache {
    cell: OnceLock<Arc<RestaurantDataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached dataset, loading it from `source` on first use.
    pub fn get_or_load(&self, source: &DatasetSource) -> Result<Arc<RestaurantDataset>, DatasetError> {
        self.get_or_load_with(|| {
            info!(%source, "Loading restaurant dataset");
            source.load()
        })
    }

    /// Like [`DatasetCache::get_or_load`], with a caller-supplied loader.
    pub fn get_or_load_with<F>(&self, loader: F) -> Result<Arc<RestaurantDataset>, DatasetError>
    where
        F: FnOnce() -> Result<RestaurantDataset, DatasetError>,
    {
        if let Some(dataset) = self.cell.get() {
            debug!("Serving restaurant dataset from cache");
            return Ok(Arc::clone(dataset));
        }

        let loaded = Arc::new(loader()?);
        info!(restaurants = loaded.len(), "Restaurant dataset cached");

        // If another thread won the race its copy is kept and ours is dropped.
        Ok(Arc::clone(self.cell.get_or_init(|| loaded)))
    }

    pub fn get(&self) -> Option<Arc<RestaurantDataset>> {
        self.cell.get().cloned()
    }
}
