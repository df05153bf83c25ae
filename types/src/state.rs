use crate::time::UtcTimestamp;
use derive_more::Display;

/// Propagated satellite state
#[derive(Copy, Clone, PartialEq, Debug, Display)]
#[display(
    fmt = "{{timestamp: {}, pos: {}, vel: {}}}",
    "timestamp",
    "position",
    "velocity"
)]
pub struct InertialState {
    /// The instant this state is valid for
    pub timestamp: UtcTimestamp,

    /// Position [km], expressed in the Earth-centered inertial (TEME) frame
    pub position: na::Vector3<f64>,

    /// Velocity [km/s], expressed in the Earth-centered inertial (TEME) frame
    pub velocity: na::Vector3<f64>,
}

impl InertialState {
    pub fn new(
        timestamp: UtcTimestamp,
        position: na::Vector3<f64>,
        velocity: na::Vector3<f64>,
    ) -> Self {
        Self {
            timestamp,
            position,
            velocity,
        }
    }

    /// Distance from the Earth's center [km]
    pub fn geocentric_distance(&self) -> f64 {
        self.position.norm()
    }

    /// Velocity magnitude [km/s]
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().chain(self.velocity.iter()).all(|v| v.is_finite())
    }
}
