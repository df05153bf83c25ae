//! Speed and ground-track heading

use crate::{
    geodetic::project,
    units::{Angle, Time, Timestamp, Velocity},
    OrbitPropagator, PropagationError,
};
use satgus_types::prelude::*;

/// Forward step used to difference the ground track
pub const HEADING_STEP: Time = Time::from_secs(1.0);

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Kinematics {
    pub speed: Velocity,
    /// Compass heading of the ground track, [0, 360)
    pub heading: Angle,
}

pub fn derive<P: OrbitPropagator + ?Sized>(
    propagator: &P,
    state: &InertialState,
) -> Result<Kinematics, PropagationError> {
    let later_at = Timestamp::from_utc(state.timestamp) + HEADING_STEP;
    let later = propagator.propagate(later_at.into_utc())?;

    let from = project(state);
    let to = project(&later);

    Ok(Kinematics {
        speed: Velocity::from_kilometers_per_second(state.speed()),
        heading: initial_bearing(
            Angle::from_degrees(from.latitude),
            Angle::from_degrees(from.longitude),
            Angle::from_degrees(to.latitude),
            Angle::from_degrees(to.longitude),
        ),
    })
}

/// Signed difference `to - from` wrapped into [-180, 180)
pub fn shortest_longitude_delta(from: Angle, to: Angle) -> Angle {
    (to - from).normalized_signed()
}

/// Great-circle initial bearing from point 1 to point 2
pub fn initial_bearing(lat1: Angle, lon1: Angle, lat2: Angle, lon2: Angle) -> Angle {
    let d_lon = shortest_longitude_delta(lon1, lon2).as_radians();
    let (phi1, phi2) = (lat1.as_radians(), lat2.as_radians());

    let y = d_lon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lon.cos();
    Angle::from_radians(y.atan2(x)).normalized()
}
