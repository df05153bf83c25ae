use chrono::{Duration, TimeZone, Utc};
use satgus_lib::{
    elements::OrbitalElements,
    passes::{find_passes, PassError, PassPredictor, PassSearch},
    propagator::Sgp4Propagator,
    units::Angle,
};
use satgus_types::prelude::*;
use std::sync::Arc;

mod common;

use common::EquatorialOrbit;

const RADIUS_KM: f64 = 6878.137;

fn epoch() -> UtcTimestamp {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
}

fn seconds_from_epoch(at: UtcTimestamp) -> f64 {
    (at - epoch()).num_milliseconds() as f64 / 1000.0
}

#[test]
fn overhead_pass_is_symmetric() {
    let orbit = EquatorialOrbit::new(epoch(), RADIUS_KM, -90.0, 1.0);
    let observer = Observer::from_degrees(0.0, 0.0);
    let end = epoch() + Duration::seconds(3000);

    let events = find_passes(&orbit, &observer, epoch(), end, 0.0).unwrap();
    let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![PassEventKind::Rise, PassEventKind::Set]);
    for ev in &events {
        assert!(ev.elevation.abs() < 0.1, "{ev}");
    }

    // Subpoint crosses longitude 0 after a quarter turn relative to the ground
    let overhead = (90.0_f64).to_radians() / orbit.ground_track_rate();
    let rise = seconds_from_epoch(events[0].timestamp);
    let set = seconds_from_epoch(events[1].timestamp);
    assert!(rise < overhead && overhead < set);
    assert!((rise + set - 2.0 * overhead).abs() < 0.5, "{rise} {set} {overhead}");
}

#[test]
fn culmination_between_rise_and_set() {
    let orbit = EquatorialOrbit::new(epoch(), RADIUS_KM, -90.0, 1.0);
    let observer = Observer::from_degrees(0.0, 0.0);
    let predictor = PassPredictor::new(&orbit, &observer, PassSearch::default()).unwrap();

    let events = predictor
        .events(epoch(), epoch() + Duration::seconds(3000))
        .unwrap();
    let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PassEventKind::Rise,
            PassEventKind::Culminate,
            PassEventKind::Set
        ]
    );
    let peak = &events[1];
    assert!(peak.elevation > 89.0, "{peak}");
    assert!(events[0].timestamp < peak.timestamp && peak.timestamp < events[2].timestamp);
}

#[test]
fn threshold_shortens_pass() {
    let orbit = EquatorialOrbit::new(epoch(), RADIUS_KM, -90.0, 1.0);
    let observer = Observer::from_degrees(0.0, 0.0);
    let end = epoch() + Duration::seconds(3000);

    let horizon = find_passes(&orbit, &observer, epoch(), end, 0.0).unwrap();
    let high = find_passes(&orbit, &observer, epoch(), end, 30.0).unwrap();
    assert_eq!(high.len(), 2);
    assert!(high[0].timestamp > horizon[0].timestamp);
    assert!(high[1].timestamp < horizon[1].timestamp);
    for ev in &high {
        assert!((ev.elevation - 30.0).abs() < 0.1, "{ev}");
    }
}

#[test]
fn no_pass_on_far_side() {
    let orbit = EquatorialOrbit::new(epoch(), RADIUS_KM, 180.0, 1.0);
    let observer = Observer::from_degrees(0.0, 0.0);
    let events = find_passes(&orbit, &observer, epoch(), epoch() + Duration::seconds(600), 0.0)
        .unwrap();
    assert!(events.is_empty());
}

#[test]
fn window_must_advance() {
    let orbit = EquatorialOrbit::new(epoch(), RADIUS_KM, 0.0, 1.0);
    let observer = Observer::from_degrees(0.0, 0.0);
    assert!(matches!(
        find_passes(&orbit, &observer, epoch(), epoch(), 0.0),
        Err(PassError::InvalidWindow { .. })
    ));
    assert!(matches!(
        find_passes(&orbit, &observer, epoch(), epoch() - Duration::seconds(1), 0.0),
        Err(PassError::InvalidWindow { .. })
    ));
}

#[test]
fn elevation_at_zenith() {
    let orbit = EquatorialOrbit::new(epoch(), RADIUS_KM, 0.0, 1.0);
    let observer = Observer::from_degrees(0.0, 0.0);
    let predictor = PassPredictor::new(
        &orbit,
        &observer,
        PassSearch::default().with_min_elevation(Angle::from_degrees(10.0)),
    )
    .unwrap();
    let elevation = predictor.elevation_at(epoch()).unwrap().as_degrees();
    assert!((elevation - 90.0).abs() < 1e-6, "{elevation}");
    assert_eq!(predictor.search().min_elevation, Angle::from_degrees(10.0));
}

#[test]
fn iss_passes_over_new_york() {
    let [name, line1, line2] = common::ISS;
    let elements = Arc::new(OrbitalElements::from_lines(name, line1, line2).unwrap());
    let start = elements.epoch();
    let propagator = Sgp4Propagator::new(elements).unwrap();
    let observer = Observer::from_degrees(40.7128, -74.0060);

    let events = find_passes(&propagator, &observer, start, start + Duration::hours(24), 0.0)
        .unwrap();
    assert!(!events.is_empty());
    for pair in events.windows(2) {
        assert!(pair[0].timestamp < pair[1].timestamp);
        assert_ne!(pair[0].kind, pair[1].kind);
    }
    for ev in &events {
        assert!(ev.timestamp >= start && ev.timestamp <= start + Duration::hours(24));
        assert!(ev.elevation.abs() < 0.5, "{ev}");
    }
}
