//! Horizon-crossing search as seen from a ground observer

use crate::{
    distance::observer_ecef,
    geodetic::inertial_to_ecef,
    units::{Angle, Time, Timestamp},
    OrbitPropagator, PropagationError,
};
use satgus_types::prelude::*;
use std::cmp::min;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PassError {
    #[error("Pass window end {end} is not after its start {start}")]
    InvalidWindow {
        start: UtcTimestamp,
        end: UtcTimestamp,
    },
    #[error("Invalid pass search. {0}")]
    InvalidSearch(String),
    #[error(transparent)]
    Observer(#[from] ObserverError),
    #[error(transparent)]
    Propagation(#[from] PropagationError),
}

/// Timestamps are kept to whole microseconds, so brackets can't shrink below this
pub const MIN_PRECISION: Time = Time::from_secs(1e-6);

/// Root-search parameters.
///
/// The window is sampled every `step`; each sign change of
/// `elevation - min_elevation` is then bisected until the bracket is
/// no wider than `precision`. Passes shorter than `step` can be missed.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PassSearch {
    pub step: Time,
    pub precision: Time,
    pub min_elevation: Angle,
}

impl Default for PassSearch {
    fn default() -> Self {
        Self {
            step: Time::from_secs(30.0),
            precision: Time::from_millis(100.0),
            min_elevation: Angle::from_degrees(0.0),
        }
    }
}

impl PassSearch {
    pub fn with_min_elevation(mut self, min_elevation: Angle) -> Self {
        self.min_elevation = min_elevation;
        self
    }

    /// Precision of at least [`MIN_PRECISION`], a step longer than the precision
    /// and a finite threshold
    pub fn validate(&self) -> Result<(), PassError> {
        let (step, precision) = (self.step.as_secs(), self.precision.as_secs());
        if !(precision >= MIN_PRECISION.as_secs()) || !precision.is_finite() {
            return Err(PassError::InvalidSearch(format!(
                "precision {precision} s is below {} s",
                MIN_PRECISION.as_secs()
            )));
        }
        if !(step > precision) || !step.is_finite() {
            return Err(PassError::InvalidSearch(format!(
                "step {step} s must be finite and longer than the precision {precision} s"
            )));
        }
        if !self.min_elevation.as_degrees().is_finite() {
            return Err(PassError::InvalidSearch(
                "minimum elevation is not finite".to_owned(),
            ));
        }
        Ok(())
    }
}

pub struct PassPredictor<'a, P: ?Sized> {
    propagator: &'a P,
    search: PassSearch,
    observer_ecef: na::Vector3<f64>,
    up: na::Vector3<f64>,
}

impl<'a, P: OrbitPropagator + ?Sized> PassPredictor<'a, P> {
    pub fn new(
        propagator: &'a P,
        observer: &Observer,
        search: PassSearch,
    ) -> Result<Self, PassError> {
        search.validate()?;
        let observer_ecef = observer_ecef(observer)?;
        let (lat, lon) = (
            Angle::from_degrees(observer.latitude).as_radians(),
            Angle::from_degrees(observer.longitude).as_radians(),
        );
        // Ellipsoid normal
        let up = na::Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin());
        Ok(Self {
            propagator,
            search,
            observer_ecef,
            up,
        })
    }

    pub fn search(&self) -> &PassSearch {
        &self.search
    }

    /// Elevation of the satellite above the observer's horizon plane
    pub fn elevation_at(&self, at: UtcTimestamp) -> Result<Angle, PropagationError> {
        let state = self.propagator.propagate(at)?;
        let range = inertial_to_ecef(&state.position, &at) - self.observer_ecef;
        let sin_el = (range.dot(&self.up) / range.norm()).clamp(-1.0, 1.0);
        Ok(Angle::from_radians(sin_el.asin()))
    }

    fn margin(&self, at: Timestamp) -> Result<f64, PropagationError> {
        Ok((self.elevation_at(at.into_utc())? - self.search.min_elevation).as_degrees())
    }

    /// Threshold crossings (rise and set) in chronological order
    pub fn crossings(
        &self,
        window_start: UtcTimestamp,
        window_end: UtcTimestamp,
    ) -> Result<Vec<PassEvent>, PassError> {
        if window_end <= window_start {
            return Err(PassError::InvalidWindow {
                start: window_start,
                end: window_end,
            });
        }

        let end = Timestamp::from_utc(window_end);
        let mut t0 = Timestamp::from_utc(window_start);
        let mut m0 = self.margin(t0)?;
        let mut events = Vec::new();

        loop {
            let t1 = min(t0 + self.search.step, end);
            let m1 = self.margin(t1)?;

            if (m0 < 0.0) != (m1 < 0.0) {
                let at = self.refine(t0, m0, t1)?;
                let kind = if m0 < 0.0 {
                    PassEventKind::Rise
                } else {
                    PassEventKind::Set
                };
                events.push(PassEvent {
                    timestamp: at.into_utc(),
                    kind,
                    elevation: self.elevation_at(at.into_utc())?.as_degrees(),
                });
            }

            if t1 >= end {
                break;
            }
            t0 = t1;
            m0 = m1;
        }

        debug!(
            start = %window_start,
            end = %window_end,
            min_elevation = self.search.min_elevation.as_degrees(),
            crossings = events.len(),
            "Pass search complete"
        );
        Ok(events)
    }

    /// Crossings plus a culmination between each rise and the set that follows it
    pub fn events(
        &self,
        window_start: UtcTimestamp,
        window_end: UtcTimestamp,
    ) -> Result<Vec<PassEvent>, PassError> {
        let crossings = self.crossings(window_start, window_end)?;
        let mut events = Vec::with_capacity(crossings.len() + crossings.len() / 2);

        for (i, ev) in crossings.iter().enumerate() {
            events.push(*ev);
            if ev.kind != PassEventKind::Rise {
                continue;
            }
            if let Some(set) = crossings
                .get(i + 1)
                .filter(|next| next.kind == PassEventKind::Set)
            {
                events.push(self.culmination(ev.timestamp, set.timestamp)?);
            }
        }
        Ok(events)
    }

    /// Bisects a bracket whose margin changes sign
    fn refine(
        &self,
        lo: Timestamp,
        m_lo: f64,
        hi: Timestamp,
    ) -> Result<Timestamp, PropagationError> {
        let (mut lo, mut hi) = (lo, hi);
        let below = m_lo < 0.0;
        while (hi - lo).as_secs() > self.search.precision.as_secs() {
            let mid = lo + (hi - lo) / 2.0;
            if mid == lo || mid == hi {
                break;
            }
            if (self.margin(mid)? < 0.0) == below {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Ok(lo + (hi - lo) / 2.0)
    }

    /// Golden-section search for the elevation maximum in [rise, set]
    fn culmination(
        &self,
        rise: UtcTimestamp,
        set: UtcTimestamp,
    ) -> Result<PassEvent, PropagationError> {
        let inv_phi = (5.0_f64.sqrt() - 1.0) / 2.0;
        let origin = Timestamp::from_utc(rise);
        let elevation = |secs: f64| -> Result<f64, PropagationError> {
            let at = origin + Time::from_secs(secs);
            Ok(self.elevation_at(at.into_utc())?.as_degrees())
        };

        let (mut a, mut b) = (0.0, (Timestamp::from_utc(set) - origin).as_secs());
        let mut c = b - inv_phi * (b - a);
        let mut d = a + inv_phi * (b - a);
        let (mut fc, mut fd) = (elevation(c)?, elevation(d)?);

        while b - a > self.search.precision.as_secs() {
            if fc > fd {
                b = d;
                d = c;
                fd = fc;
                c = b - inv_phi * (b - a);
                fc = elevation(c)?;
            } else {
                a = c;
                c = d;
                fc = fd;
                d = a + inv_phi * (b - a);
                fd = elevation(d)?;
            }
        }

        let at = (origin + Time::from_secs((a + b) / 2.0)).into_utc();
        Ok(PassEvent {
            timestamp: at,
            kind: PassEventKind::Culminate,
            elevation: self.elevation_at(at)?.as_degrees(),
        })
    }
}

/// Rise and set crossings of `min_elevation_degrees` within the window, using the default search
pub fn find_passes<P: OrbitPropagator + ?Sized>(
    propagator: &P,
    observer: &Observer,
    window_start: UtcTimestamp,
    window_end: UtcTimestamp,
    min_elevation_degrees: f64,
) -> Result<Vec<PassEvent>, PassError> {
    let search =
        PassSearch::default().with_min_elevation(Angle::from_degrees(min_elevation_degrees));
    PassPredictor::new(propagator, observer, search)?.crossings(window_start, window_end)
}
