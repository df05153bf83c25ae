//! Straight-line distance between a ground observer and the satellite

use crate::{
    geodetic::{ecef_to_inertial, surface_ecef},
    units::Length,
};
use satgus_types::prelude::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistanceError {
    #[error("State is valid for {state} but the distance was requested at {requested}")]
    InstantMismatch {
        state: UtcTimestamp,
        requested: UtcTimestamp,
    },
    #[error(transparent)]
    Observer(#[from] ObserverError),
}

/// Earth-fixed observer position [km]
pub fn observer_ecef(observer: &Observer) -> Result<na::Vector3<f64>, ObserverError> {
    observer.validate()?;
    Ok(surface_ecef(observer.latitude, observer.longitude))
}

/// Inertial observer position [km] at `at`
pub fn observer_position(
    observer: &Observer,
    at: &UtcTimestamp,
) -> Result<na::Vector3<f64>, ObserverError> {
    Ok(ecef_to_inertial(&observer_ecef(observer)?, at))
}

pub fn distance(
    state: &InertialState,
    observer: &Observer,
    at: UtcTimestamp,
) -> Result<Length, DistanceError> {
    if at != state.timestamp {
        return Err(DistanceError::InstantMismatch {
            state: state.timestamp,
            requested: at,
        });
    }
    slant_range(state, observer)
}

/// Distance at the state's own instant
pub fn slant_range(state: &InertialState, observer: &Observer) -> Result<Length, DistanceError> {
    let observer = observer_position(observer, &state.timestamp)?;
    Ok(Length::from_kilometers((state.position - observer).norm()))
}
