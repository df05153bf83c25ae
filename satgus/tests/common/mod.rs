#![allow(dead_code)]

use satgus_lib::{
    classify::{GeoClassifier, GeoJsonFiles},
    geodetic::ecef_to_inertial,
    na, OrbitPropagator, PropagationError,
};
use satgus_types::prelude::*;
use std::path::{Path, PathBuf};

pub const MU_KM3_S2: f64 = 398600.4418;
pub const EARTH_ROTATION_RAD_S: f64 = 7.292115e-5;

/// Circular orbit in the equatorial plane with a closed-form ground track
pub struct EquatorialOrbit {
    pub epoch: UtcTimestamp,
    pub radius_km: f64,
    pub start_longitude_deg: f64,
    /// 1.0 prograde, -1.0 retrograde
    pub direction: f64,
}

impl EquatorialOrbit {
    pub fn new(epoch: UtcTimestamp, radius_km: f64, start_longitude_deg: f64, direction: f64) -> Self {
        Self {
            epoch,
            radius_km,
            start_longitude_deg,
            direction,
        }
    }

    /// Inertial angular rate [rad/s]
    pub fn angular_rate(&self) -> f64 {
        self.direction * (MU_KM3_S2 / self.radius_km.powi(3)).sqrt()
    }

    /// Rate of the subpoint longitude [rad/s]
    pub fn ground_track_rate(&self) -> f64 {
        self.angular_rate() - EARTH_ROTATION_RAD_S
    }
}

impl OrbitPropagator for EquatorialOrbit {
    fn propagate(&self, at: UtcTimestamp) -> Result<InertialState, PropagationError> {
        let dt = (at - self.epoch)
            .num_microseconds()
            .ok_or(PropagationError::EpochOutOfRange(at))? as f64
            / 1e6;
        let lon = self.start_longitude_deg.to_radians() + self.ground_track_rate() * dt;
        let ecef = na::Vector3::new(self.radius_km * lon.cos(), self.radius_km * lon.sin(), 0.0);
        let position = ecef_to_inertial(&ecef, &at);
        let velocity = na::Vector3::new(0.0, 0.0, self.angular_rate()).cross(&position);
        Ok(InertialState::new(at, position, velocity))
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

pub fn fixture_files(with_ocean: bool) -> GeoJsonFiles {
    GeoJsonFiles {
        countries: fixture_path("countries.geojson"),
        land: fixture_path("land.geojson"),
        marine: fixture_path("marine.geojson"),
        ocean: with_ocean.then(|| fixture_path("ocean.geojson")),
    }
}

pub fn fixture_classifier(with_ocean: bool) -> GeoClassifier {
    GeoClassifier::from_files(fixture_files(with_ocean))
}

pub const VANGUARD: [&str; 3] = [
    "VANGUARD 1",
    "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753",
    "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667",
];

pub const ISS: [&str; 3] = [
    "ISS (ZARYA)",
    "1 25544U 98067A   24001.50000000  .00016717  00000-0  10270-3 0  9021",
    "2 25544  51.6400 208.9163 0006703 130.5360 325.0288 15.50377579999993",
];
