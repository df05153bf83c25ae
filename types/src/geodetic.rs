use crate::time::UtcTimestamp;
use derive_more::Display;

/// Satellite subpoint on the WGS-84 ellipsoid
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display)]
#[display(
    fmt = "{{lat: {}, lon: {}, alt: {}}}",
    "latitude",
    "longitude",
    "altitude"
)]
pub struct GeodeticPoint {
    pub timestamp: UtcTimestamp,

    /// Geodetic latitude [deg], [-90, 90]
    pub latitude: f64,
    /// Longitude [deg], (-180, 180]
    pub longitude: f64,
    /// Altitude above the equatorial radius [km]
    pub altitude: f64,
}
