use derive_more::Display;
use geo::{BoundingRect, Contains, MultiPolygon, Point, Rect};
use geojson::{feature::Id, FeatureCollection, GeoJson};
use satgus_types::location::LocationType;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, warn};

/// One of the polygon datasets consulted by the classifier
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum RegionLayer {
    #[display(fmt = "countries")]
    Countries,
    #[display(fmt = "land")]
    Land,
    #[display(fmt = "marine")]
    Marine,
    #[display(fmt = "ocean")]
    Ocean,
}

impl RegionLayer {
    /// Classification order; the first layer containing the point wins
    pub const PRECEDENCE: [RegionLayer; 4] = [
        RegionLayer::Countries,
        RegionLayer::Land,
        RegionLayer::Marine,
        RegionLayer::Ocean,
    ];

    /// Feature property keys tried, in order, for the region name
    pub fn name_keys(&self) -> &'static [&'static str] {
        match self {
            RegionLayer::Countries => &["ADMIN", "name", "NAME", "admin", "country"],
            RegionLayer::Land => &["CONTINENT", "continent", "NAME", "name"],
            RegionLayer::Marine => &["name", "NAME", "name_en"],
            RegionLayer::Ocean => &["name", "NAME", "featurecla"],
        }
    }

    pub fn location_type(&self) -> LocationType {
        match self {
            RegionLayer::Countries => LocationType::Country,
            RegionLayer::Land => LocationType::Continent,
            RegionLayer::Marine | RegionLayer::Ocean => LocationType::Ocean,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read the {layer} dataset '{}'. {source}", .path.display())]
    Io {
        layer: RegionLayer,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse the {layer} dataset. {source}")]
    GeoJson {
        layer: RegionLayer,
        #[source]
        source: Box<geojson::Error>,
    },
    #[error("The {0} dataset is not a GeoJSON FeatureCollection")]
    NotFeatureCollection(RegionLayer),
}

/// A named (multi)polygon
#[derive(Clone, Debug)]
pub struct Region {
    pub name: Option<String>,
    geometry: MultiPolygon<f64>,
    bounds: Option<Rect<f64>>,
}

impl Region {
    pub fn new(name: Option<String>, geometry: MultiPolygon<f64>) -> Self {
        let bounds = geometry.bounding_rect();
        Self {
            name,
            geometry,
            bounds,
        }
    }

    /// Strict interior test, boundary points are outside
    pub fn contains(&self, point: &Point<f64>) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };
        let (min, max) = (bounds.min(), bounds.max());
        if point.x() < min.x || point.x() > max.x || point.y() < min.y || point.y() > max.y {
            return false;
        }
        self.geometry.contains(point)
    }
}

#[derive(Clone, Debug)]
pub struct RegionDataset {
    layer: RegionLayer,
    regions: Vec<Region>,
}

impl RegionDataset {
    pub fn new(layer: RegionLayer, regions: Vec<Region>) -> Self {
        Self { layer, regions }
    }

    pub fn from_geojson_str(layer: RegionLayer, s: &str) -> Result<Self, DatasetError> {
        let geojson: GeoJson = s.parse().map_err(|e| DatasetError::GeoJson {
            layer,
            source: Box::new(e),
        })?;
        match geojson {
            GeoJson::FeatureCollection(fc) => Ok(Self::from_feature_collection(layer, fc)),
            _ => Err(DatasetError::NotFeatureCollection(layer)),
        }
    }

    /// Keeps polygonal features in file order; other geometry types are skipped
    pub fn from_feature_collection(layer: RegionLayer, fc: FeatureCollection) -> Self {
        let mut regions = Vec::with_capacity(fc.features.len());
        for (idx, feature) in fc.features.into_iter().enumerate() {
            let name = feature
                .properties
                .as_ref()
                .and_then(|props| region_name(layer, props));
            let Some(geometry) = feature.geometry else {
                debug!(%layer, idx, "Skipping feature without geometry");
                continue;
            };
            let geometry = match geo::Geometry::<f64>::try_from(geometry.value) {
                Ok(geo::Geometry::Polygon(p)) => MultiPolygon::new(vec![p]),
                Ok(geo::Geometry::MultiPolygon(mp)) => mp,
                Ok(_) => {
                    debug!(%layer, idx, ?name, "Skipping non-polygonal feature");
                    continue;
                }
                Err(e) => {
                    let id = feature.id.map(|id| match id {
                        Id::String(s) => s,
                        Id::Number(n) => n.to_string(),
                    });
                    warn!(%layer, idx, ?id, err = %e, "Skipping feature with invalid geometry");
                    continue;
                }
            };
            regions.push(Region::new(name, geometry));
        }
        Self { layer, regions }
    }

    pub fn layer(&self) -> RegionLayer {
        self.layer
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// First region in file order containing `point`
    pub fn locate(&self, point: &Point<f64>) -> Option<&Region> {
        self.regions.iter().find(|r| r.contains(point))
    }
}

/// First candidate key with a non-null value. Non-string values use their JSON text.
fn region_name(layer: RegionLayer, props: &serde_json::Map<String, Value>) -> Option<String> {
    layer
        .name_keys()
        .iter()
        .find_map(|key| match props.get(*key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        })
}
