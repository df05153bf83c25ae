use crate::location::Location;
use crate::time::{iso8601, UtcTimestamp};
use serde::{Deserialize, Serialize};

/// One labeled, timestamped satellite observation
///
/// The serialized keys are a stable output format consumed by downstream
/// displays; don't rename them.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Observation {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_km: f64,
    pub altitude_miles: f64,
    pub velocity_km_s: f64,
    pub velocity_km_h: f64,
    pub velocity_mph: f64,
    /// km/s scaled by the statute-mile factor, i.e. miles per second
    pub velocity_mps: f64,
    pub heading_degrees: f64,
    #[serde(with = "iso8601")]
    pub timestamp: UtcTimestamp,
    #[serde(flatten)]
    pub location: Location,
    /// Slant distance to the observer, when one was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationType;
    use chrono::{TimeZone, Utc};

    fn observation(distance_km: Option<f64>) -> Observation {
        Observation {
            latitude: 51.5072,
            longitude: -0.1276,
            altitude_km: 512.3,
            altitude_miles: 512.3 * 0.621371,
            velocity_km_s: 7.61,
            velocity_km_h: 7.61 * 3600.0,
            velocity_mph: 7.61 * 3600.0 * 0.621371,
            velocity_mps: 7.61 * 0.621371,
            heading_degrees: 57.25,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
            location: Location::new(LocationType::Country, Some("United Kingdom".to_owned())),
            distance_km,
        }
    }

    #[test]
    fn json_round_trip() {
        for obs in [observation(None), observation(Some(1234.5))] {
            let json = serde_json::to_string(&obs).unwrap();
            let back: Observation = serde_json::from_str(&json).unwrap();
            assert_eq!(obs, back);
        }
    }

    #[test]
    fn stable_keys() {
        let value = serde_json::to_value(observation(None)).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "altitude_km",
                "altitude_miles",
                "heading_degrees",
                "latitude",
                "location_name",
                "location_type",
                "longitude",
                "timestamp",
                "velocity_km_h",
                "velocity_km_s",
                "velocity_mph",
                "velocity_mps",
            ]
        );
        assert_eq!(obj["timestamp"], "2024-03-01T12:30:00+00:00");
        assert_eq!(obj["location_type"], "country");

        let value = serde_json::to_value(observation(Some(10.0))).unwrap();
        assert_eq!(value["distance_km"], 10.0);
    }

    #[test]
    fn unknown_location_serializes_null_name() {
        let mut obs = observation(None);
        obs.location = Location::unknown();
        let value = serde_json::to_value(obs).unwrap();
        assert_eq!(value["location_type"], "unknown");
        assert!(value["location_name"].is_null());
    }
}
