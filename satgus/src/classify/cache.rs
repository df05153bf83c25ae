use super::dataset::{DatasetError, RegionDataset, RegionLayer};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};
use tracing::info;

/// Where region datasets come from
pub trait DatasetSource {
    /// Loads `layer`. `Ok(None)` means the layer isn't configured and is skipped.
    fn load(&self, layer: RegionLayer) -> Result<Option<RegionDataset>, DatasetError>;
}

/// GeoJSON files on disk, one per layer
#[derive(Clone, PartialEq, Debug)]
pub struct GeoJsonFiles {
    pub countries: PathBuf,
    pub land: PathBuf,
    pub marine: PathBuf,
    pub ocean: Option<PathBuf>,
}

impl GeoJsonFiles {
    pub fn path(&self, layer: RegionLayer) -> Option<&Path> {
        match layer {
            RegionLayer::Countries => Some(&self.countries),
            RegionLayer::Land => Some(&self.land),
            RegionLayer::Marine => Some(&self.marine),
            RegionLayer::Ocean => self.ocean.as_deref(),
        }
    }
}

impl DatasetSource for GeoJsonFiles {
    fn load(&self, layer: RegionLayer) -> Result<Option<RegionDataset>, DatasetError> {
        let Some(path) = self.path(layer) else {
            return Ok(None);
        };
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            layer,
            path: path.to_owned(),
            source,
        })?;
        let dataset = RegionDataset::from_geojson_str(layer, &content)?;
        info!(%layer, path = %path.display(), regions = dataset.len(), "Loaded region dataset");
        Ok(Some(dataset))
    }
}

/// Lazily loaded, shared region datasets.
///
/// Each layer is loaded at most once on first use. The check-and-load runs
/// under a single lock, so concurrent first use still loads once. Failed loads
/// are not remembered and will be retried by the next caller.
pub struct RegionCache<S = GeoJsonFiles> {
    source: S,
    loaded: Mutex<HashMap<RegionLayer, Option<Arc<RegionDataset>>>>,
}

impl<S: DatasetSource> RegionCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            loaded: Mutex::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn get(&self, layer: RegionLayer) -> Result<Option<Arc<RegionDataset>>, DatasetError> {
        // A panic while loading leaves the map untouched
        let mut loaded = self.loaded.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(dataset) = loaded.get(&layer) {
            return Ok(dataset.clone());
        }
        let dataset = self.source.load(layer)?.map(Arc::new);
        loaded.insert(layer, dataset.clone());
        Ok(dataset)
    }

    pub fn is_loaded(&self, layer: RegionLayer) -> bool {
        self.loaded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&layer)
    }
}
