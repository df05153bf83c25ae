use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObserverError {
    #[error("Observer latitude {0} is outside [-90, 90]")]
    Latitude(f64),
    #[error("Observer longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

/// A fixed point on the Earth's surface (WGS-84, zero altitude)
#[derive(Copy, Clone, PartialEq, Debug, Display, Serialize, Deserialize)]
#[display(fmt = "{{lat: {}, lon: {}}}", "latitude", "longitude")]
pub struct Observer {
    /// [deg]
    pub latitude: f64,
    /// [deg]
    pub longitude: f64,
}

impl Observer {
    /// Checked constructor, see [`Observer::validate`]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ObserverError> {
        let observer = Self::from_degrees(latitude, longitude);
        observer.validate()?;
        Ok(observer)
    }

    /// Unchecked constructor
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180], both finite
    pub fn validate(&self) -> Result<(), ObserverError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ObserverError::Latitude(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ObserverError::Longitude(self.longitude));
        }
        Ok(())
    }
}
