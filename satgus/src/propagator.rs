use crate::{elements::OrbitalElements, OrbitPropagator};
use satgus_types::prelude::*;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropagationError {
    #[error("Failed to initialize SGP4 for '{name}'. {reason}")]
    Initialization { name: String, reason: String },
    #[error("SGP4 propagation failed at {at}. {reason}")]
    Sgp4 { at: UtcTimestamp, reason: String },
    #[error("Instant {0} is too far from the element set epoch")]
    EpochOutOfRange(UtcTimestamp),
    #[error("Propagation produced a non-finite state at {0}")]
    NonFinite(UtcTimestamp),
}

/// SGP4/SDP4 propagator for one element set
pub struct Sgp4Propagator {
    elements: Arc<OrbitalElements>,
    constants: sgp4::Constants,
}

impl Sgp4Propagator {
    pub fn new(elements: Arc<OrbitalElements>) -> Result<Self, PropagationError> {
        let constants = sgp4::Constants::from_elements(elements.sgp4_elements()).map_err(|e| {
            PropagationError::Initialization {
                name: elements.name().to_owned(),
                reason: e.to_string(),
            }
        })?;
        debug!(
            name = elements.name(),
            norad_id = elements.norad_id(),
            epoch = %elements.epoch(),
            "Initialized SGP4 propagator"
        );
        Ok(Self {
            elements,
            constants,
        })
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }
}

impl OrbitPropagator for Sgp4Propagator {
    fn propagate(&self, at: UtcTimestamp) -> Result<InertialState, PropagationError> {
        let since_epoch = at.signed_duration_since(self.elements.epoch());
        let micros = since_epoch
            .num_microseconds()
            .ok_or(PropagationError::EpochOutOfRange(at))?;
        let minutes = micros as f64 / 60_000_000.0;

        let prediction = self
            .constants
            .propagate(sgp4::MinutesSinceEpoch(minutes))
            .map_err(|e| PropagationError::Sgp4 {
                at,
                reason: e.to_string(),
            })?;

        let state = InertialState::new(
            at,
            na::Vector3::from(prediction.position),
            na::Vector3::from(prediction.velocity),
        );
        if !state.is_finite() {
            return Err(PropagationError::NonFinite(at));
        }
        Ok(state)
    }
}
