use crate::{
    classify::{DatasetSource, GeoClassifier},
    distance::distance,
    geodetic::project,
    kinematics,
    units::Length,
    Error, OrbitPropagator,
};
use chrono::Utc;
use satgus_types::prelude::*;
use tracing::debug;

/// Composes projection, kinematics, distance and classification into one record
pub struct ObservationAssembler<'a, P: ?Sized, S> {
    propagator: &'a P,
    classifier: &'a GeoClassifier<S>,
}

impl<'a, P: OrbitPropagator + ?Sized, S: DatasetSource> ObservationAssembler<'a, P, S> {
    pub fn new(propagator: &'a P, classifier: &'a GeoClassifier<S>) -> Self {
        Self {
            propagator,
            classifier,
        }
    }

    /// Observation at `at` (now when `None`), with the slant distance when an observer is given
    pub fn assemble(
        &self,
        at: Option<UtcTimestamp>,
        observer: Option<&Observer>,
    ) -> Result<Observation, Error> {
        let at = at.unwrap_or_else(Utc::now);
        let state = self.propagator.propagate(at)?;
        let point = project(&state);
        let kinematics = kinematics::derive(self.propagator, &state)?;
        let distance_km = observer
            .map(|obs| distance(&state, obs, at).map(|d| d.as_kilometers()))
            .transpose()?;
        let location = self.classifier.classify(point.latitude, point.longitude)?;
        debug!(%point, %state, kind = %location.kind, "Assembled observation");

        let altitude = Length::from_kilometers(point.altitude);
        Ok(Observation {
            latitude: point.latitude,
            longitude: point.longitude,
            altitude_km: altitude.as_kilometers(),
            altitude_miles: altitude.as_miles(),
            velocity_km_s: kinematics.speed.as_kilometers_per_second(),
            velocity_km_h: kinematics.speed.as_kilometers_per_hour(),
            velocity_mph: kinematics.speed.as_miles_per_hour(),
            velocity_mps: kinematics.speed.as_miles_per_second(),
            heading_degrees: kinematics.heading.as_degrees(),
            timestamp: at,
            location,
            distance_km,
        })
    }
}
