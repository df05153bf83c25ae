//! Inertial (TEME) to Earth-fixed rotation and WGS-84 subpoint projection

use crate::units::{Angle, Length};
use nav_types::{ECEF, WGS84};
use satgus_types::prelude::*;

/// WGS-84 semi-major axis
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.137;

/// Greenwich mean sidereal time at `at` [rad]
pub fn sidereal_time(at: &UtcTimestamp) -> f64 {
    sgp4::iau_epoch_to_sidereal_time(sgp4::julian_years_since_j2000(&at.naive_utc()))
}

fn earth_rotation(at: &UtcTimestamp) -> na::Rotation3<f64> {
    na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), sidereal_time(at))
}

/// Rotates an inertial vector into the Earth-fixed frame at `at`
pub fn inertial_to_ecef(v: &na::Vector3<f64>, at: &UtcTimestamp) -> na::Vector3<f64> {
    earth_rotation(at).inverse() * v
}

/// Rotates an Earth-fixed vector into the inertial frame at `at`
pub fn ecef_to_inertial(v: &na::Vector3<f64>, at: &UtcTimestamp) -> na::Vector3<f64> {
    earth_rotation(at) * v
}

/// Longitude wrapped into (-180, 180]
pub fn wrap_longitude(longitude: f64) -> f64 {
    let wrapped = Angle::from_degrees(longitude).normalized_signed().as_degrees();
    if wrapped <= -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// Projects a state onto the WGS-84 ellipsoid.
///
/// Altitude is measured from a sphere of the equatorial radius, not the ellipsoid.
pub fn project(state: &InertialState) -> GeodeticPoint {
    let r = inertial_to_ecef(&state.position, &state.timestamp);
    let (x, y, z) = (
        Length::from_kilometers(r.x).as_meters(),
        Length::from_kilometers(r.y).as_meters(),
        Length::from_kilometers(r.z).as_meters(),
    );
    let wgs = WGS84::from(ECEF::new(x, y, z));

    GeodeticPoint {
        timestamp: state.timestamp,
        latitude: wgs.latitude_degrees(),
        longitude: wrap_longitude(wgs.longitude_degrees()),
        altitude: altitude(state).as_kilometers(),
    }
}

pub fn altitude(state: &InertialState) -> Length {
    Length::from_kilometers(state.geocentric_distance())
        - Length::from_kilometers(EARTH_EQUATORIAL_RADIUS_KM)
}

/// Earth-fixed position [km] of a point on the ellipsoid surface.
///
/// Longitude is wrapped first. Latitude must be within [-90, 90].
pub(crate) fn surface_ecef(latitude: f64, longitude: f64) -> na::Vector3<f64> {
    let longitude = wrap_longitude(longitude);
    let p = ECEF::from(WGS84::from_degrees_and_meters(latitude, longitude, 0.0));
    na::Vector3::new(
        Length::from_meters(p.x()).as_kilometers(),
        Length::from_meters(p.y()).as_kilometers(),
        Length::from_meters(p.z()).as_kilometers(),
    )
}
