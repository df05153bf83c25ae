use satgus_types::{location::LocationType, observation::Observation, time::iso8601};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to write observation to '{}'. {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode observation. {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the observation as pretty JSON, creating parent directories
pub fn save_observation<P: AsRef<Path>>(path: P, obs: &Observation) -> Result<(), OutputError> {
    let path = path.as_ref();
    let io_error = |source| OutputError::Io {
        path: path.to_owned(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let content = serde_json::to_string_pretty(obs)?;
    fs::write(path, content).map_err(io_error)?;
    info!(path = %path.display(), "Saved observation");
    Ok(())
}

/// Human readable report of an observation
pub struct Summary<'a> {
    pub satellite_name: &'a str,
    pub observation: &'a Observation,
}

impl<'a> Summary<'a> {
    pub fn new(satellite_name: &'a str, observation: &'a Observation) -> Self {
        Self {
            satellite_name,
            observation,
        }
    }
}

fn capitalized(kind: LocationType) -> &'static str {
    match kind {
        LocationType::Country => "Country",
        LocationType::Continent => "Continent",
        LocationType::Ocean => "Ocean",
        LocationType::Unknown => "Unknown",
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.observation;
        writeln!(f, "Successfully fetched {} position:", self.satellite_name)?;
        writeln!(f, "  Latitude: {:.4}°", o.latitude)?;
        writeln!(f, "  Longitude: {:.4}°", o.longitude)?;
        writeln!(f, "  Altitude: {:.1} km", o.altitude_km)?;
        writeln!(f, "  Altitude: {:.1} miles", o.altitude_miles)?;
        writeln!(f, "  Velocity: {:.2} km/s", o.velocity_km_s)?;
        writeln!(f, "  Velocity: {:.2} miles/s", o.velocity_mps)?;
        writeln!(f, "  Velocity: {:.2} km/h", o.velocity_km_h)?;
        writeln!(f, "  Velocity: {:.2} mph", o.velocity_mph)?;
        writeln!(f, "  Heading: {:.1}° (compass)", o.heading_degrees)?;
        if let Some(d) = o.distance_km {
            writeln!(f, "  Distance: {d:.1} km")?;
        }
        writeln!(f, "  Timestamp: {}", iso8601::format(&o.timestamp))?;
        write!(
            f,
            "  Location: {} - {}",
            capitalized(o.location.kind),
            o.location.name.as_deref().unwrap_or("N/A")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use indoc::indoc;
    use satgus_types::location::Location;

    fn observation() -> Observation {
        Observation {
            latitude: -12.34567,
            longitude: 123.45678,
            altitude_km: 512.34,
            altitude_miles: 318.355,
            velocity_km_s: 7.6123,
            velocity_km_h: 27404.28,
            velocity_mph: 17028.0,
            velocity_mps: 4.7301,
            heading_degrees: 301.26,
            timestamp: Utc.with_ymd_and_hms(2025, 5, 4, 3, 2, 1).unwrap(),
            location: Location::new(LocationType::Ocean, Some("Timor Sea".to_owned())),
            distance_km: None,
        }
    }

    #[test]
    fn summary_layout() {
        let obs = observation();
        let expected = indoc! {"
            Successfully fetched SATGUS position:
              Latitude: -12.3457°
              Longitude: 123.4568°
              Altitude: 512.3 km
              Altitude: 318.4 miles
              Velocity: 7.61 km/s
              Velocity: 4.73 miles/s
              Velocity: 27404.28 km/h
              Velocity: 17028.00 mph
              Heading: 301.3° (compass)
              Timestamp: 2025-05-04T03:02:01+00:00
              Location: Ocean - Timor Sea"};
        assert_eq!(Summary::new("SATGUS", &obs).to_string(), expected);
    }

    #[test]
    fn summary_unknown_location_with_distance() {
        let mut obs = observation();
        obs.location = Location::unknown();
        obs.distance_km = Some(1873.26);
        let s = Summary::new("ISS", &obs).to_string();
        assert!(s.contains(
            "  Heading: 301.3° (compass)\n  Distance: 1873.3 km\n  Timestamp: 2025-05-04T03:02:01+00:00\n"
        ));
        assert!(s.ends_with("  Location: Unknown - N/A"));
    }

    #[test]
    fn save_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trmnl_data").join("satgus_position.json");
        let obs = observation();
        save_observation(&path, &obs).unwrap();
        let back: Observation = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, obs);
    }
}
