use chrono::{DateTime, Utc};
use satgus_protocol::{check_line, TleError};
use satgus_types::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Tle(#[from] TleError),
    #[error("Invalid orbital elements for '{name}'. {reason}")]
    Elements { name: String, reason: String },
}

/// Parsed, immutable element set for a single satellite
#[derive(Clone, Debug)]
pub struct OrbitalElements {
    name: String,
    norad_id: u64,
    epoch: UtcTimestamp,
    elements: sgp4::Elements,
}

impl OrbitalElements {
    pub fn from_lines(name: &str, line1: &str, line2: &str) -> Result<Self, ParseError> {
        let name = name.trim();
        let (line1, line2) = (line1.trim(), line2.trim());
        check_line(1, line1)?;
        check_line(2, line2)?;

        let elements =
            sgp4::Elements::from_tle(Some(name.to_owned()), line1.as_bytes(), line2.as_bytes())
                .map_err(|e| ParseError::Elements {
                    name: name.to_owned(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            name: name.to_owned(),
            norad_id: elements.norad_id,
            epoch: DateTime::from_naive_utc_and_offset(elements.datetime, Utc),
            elements,
        })
    }

    pub fn from_tle(tle: &UnstructuredTle) -> Result<Self, ParseError> {
        Self::from_lines(&tle.satellite_name, &tle.line1, &tle.line2)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn norad_id(&self) -> u64 {
        self.norad_id
    }

    /// Reference instant of the element set
    pub fn epoch(&self) -> UtcTimestamp {
        self.epoch
    }

    /// Revolutions per day
    pub fn mean_motion(&self) -> f64 {
        self.elements.mean_motion
    }

    pub(crate) fn sgp4_elements(&self) -> &sgp4::Elements {
        &self.elements
    }
}
