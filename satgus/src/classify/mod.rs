//! Country / continent / ocean labels for a subpoint

use geo::Point;
use satgus_types::location::Location;
use tracing::trace;

pub use self::cache::{DatasetSource, GeoJsonFiles, RegionCache};
pub use self::dataset::{DatasetError, Region, RegionDataset, RegionLayer};

mod cache;
mod dataset;

pub struct GeoClassifier<S = GeoJsonFiles> {
    cache: RegionCache<S>,
}

impl<S: DatasetSource> GeoClassifier<S> {
    pub fn new(cache: RegionCache<S>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &RegionCache<S> {
        &self.cache
    }

    /// Labels the point with the first layer, in [`RegionLayer::PRECEDENCE`] order, that contains it.
    /// Later layers are not loaded when an earlier one matches.
    pub fn classify(&self, latitude: f64, longitude: f64) -> Result<Location, DatasetError> {
        let point = Point::new(longitude, latitude);
        for layer in RegionLayer::PRECEDENCE {
            let Some(dataset) = self.cache.get(layer)? else {
                continue;
            };
            if let Some(region) = dataset.locate(&point) {
                trace!(%layer, latitude, longitude, name = ?region.name, "Classified");
                return Ok(Location::new(layer.location_type(), region.name.clone()));
            }
        }
        Ok(Location::unknown())
    }
}

impl GeoClassifier<GeoJsonFiles> {
    pub fn from_files(files: GeoJsonFiles) -> Self {
        Self::new(RegionCache::new(files))
    }
}
