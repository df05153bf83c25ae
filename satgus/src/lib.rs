pub extern crate nalgebra as na;

use satgus_types::prelude::*;

pub use crate::error::Error;
pub use crate::propagator::PropagationError;

pub mod classify;
pub mod config;
pub mod distance;
pub mod elements;
pub mod error;
pub mod geodetic;
pub mod kinematics;
pub mod observation;
pub mod output;
pub mod passes;
pub mod propagator;
pub mod tle_source;
pub mod units;

/// Produces inertial states for a satellite whose elements were bound at construction.
pub trait OrbitPropagator {
    fn propagate(&self, at: UtcTimestamp) -> Result<InertialState, PropagationError>;
}

impl<P: OrbitPropagator + ?Sized> OrbitPropagator for &P {
    fn propagate(&self, at: UtcTimestamp) -> Result<InertialState, PropagationError> {
        (**self).propagate(at)
    }
}
