//! A lightweight uom-ish set of unit newtypes for the quantities reported in observations.

use std::ops::{Add, Div, Sub};

use satgus_types::time::UtcTimestamp;

/// Statute miles per kilometer
pub const MILES_PER_KILOMETER: f64 = 0.621371;

#[derive(Copy, Clone, PartialEq, PartialOrd)]
pub struct Length {
    kilometers: f64,
}

impl std::fmt::Debug for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} km", self.kilometers)
    }
}

impl Length {
    pub const fn from_kilometers(kilometers: f64) -> Length {
        Length { kilometers }
    }

    pub fn from_meters(meters: f64) -> Length {
        Length {
            kilometers: meters / 1000.0,
        }
    }

    pub fn as_kilometers(&self) -> f64 {
        self.kilometers
    }

    pub fn as_meters(&self) -> f64 {
        self.kilometers * 1000.0
    }

    pub fn as_miles(&self) -> f64 {
        self.kilometers * MILES_PER_KILOMETER
    }
}

impl Sub<Length> for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Self::Output {
        Length::from_kilometers(self.as_kilometers() - rhs.as_kilometers())
    }
}

#[derive(Copy, Clone, PartialEq, PartialOrd)]
pub struct Velocity {
    kilometers_per_second: f64,
}

impl std::fmt::Debug for Velocity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} km·s⁻¹", self.kilometers_per_second)
    }
}

impl Velocity {
    pub const fn from_kilometers_per_second(kilometers_per_second: f64) -> Velocity {
        Velocity {
            kilometers_per_second,
        }
    }

    pub fn as_kilometers_per_second(&self) -> f64 {
        self.kilometers_per_second
    }

    pub fn as_kilometers_per_hour(&self) -> f64 {
        self.kilometers_per_second * 3600.0
    }

    pub fn as_miles_per_hour(&self) -> f64 {
        self.as_kilometers_per_hour() * MILES_PER_KILOMETER
    }

    /// km/s scaled by [`MILES_PER_KILOMETER`]
    pub fn as_miles_per_second(&self) -> f64 {
        self.kilometers_per_second * MILES_PER_KILOMETER
    }
}

#[derive(Copy, Clone, PartialEq, PartialOrd)]
pub struct Angle {
    degrees: f64,
}

impl std::fmt::Debug for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees)
    }
}

impl Angle {
    pub const fn from_degrees(degrees: f64) -> Angle {
        Angle { degrees }
    }

    pub fn from_radians(radians: f64) -> Angle {
        Angle {
            degrees: radians.to_degrees(),
        }
    }

    pub fn as_degrees(&self) -> f64 {
        self.degrees
    }

    pub fn as_radians(&self) -> f64 {
        self.degrees.to_radians()
    }

    /// Wrapped into [0, 360)
    pub fn normalized(&self) -> Angle {
        let d = self.degrees.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        Angle::from_degrees(if d >= 360.0 { 0.0 } else { d })
    }

    /// Wrapped into [-180, 180)
    pub fn normalized_signed(&self) -> Angle {
        Angle::from_degrees((self.degrees + 180.0).rem_euclid(360.0) - 180.0)
    }
}

impl Sub<Angle> for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Self::Output {
        Angle::from_degrees(self.as_degrees() - rhs.as_degrees())
    }
}

#[derive(Copy, Clone, PartialEq, PartialOrd)]
pub struct Time {
    seconds: f64,
}

impl std::fmt::Debug for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} s", self.seconds)
    }
}

impl Time {
    pub fn from_chrono_duration(duration: chrono::Duration) -> Time {
        match duration.num_microseconds() {
            Some(us) => Time::from_secs(us as f64 / 1_000_000.0),
            None => Time::from_secs(duration.num_milliseconds() as f64 / 1_000.0),
        }
    }

    pub fn from_std_duration(duration: std::time::Duration) -> Time {
        Time::from_secs(duration.as_secs_f64())
    }

    pub const fn from_secs(seconds: f64) -> Time {
        Time { seconds }
    }

    pub fn from_millis(millis: f64) -> Time {
        Time {
            seconds: millis / 1000.0,
        }
    }

    pub fn as_secs(&self) -> f64 {
        self.seconds
    }

    pub fn as_chrono_duration(&self) -> chrono::Duration {
        chrono::Duration::microseconds((self.seconds * 1_000_000.0).round() as i64)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Self::Output {
        Time::from_secs(self.as_secs() / rhs)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct Timestamp {
    utc: UtcTimestamp,
}

impl std::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.utc)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.utc)
    }
}

impl Timestamp {
    pub fn from_utc(utc: UtcTimestamp) -> Timestamp {
        Timestamp { utc }
    }

    pub fn into_utc(self) -> UtcTimestamp {
        self.utc
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Time;

    fn sub(self, rhs: Timestamp) -> Self::Output {
        Time::from_chrono_duration(self.utc - rhs.utc)
    }
}

impl Add<Time> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Time) -> Self::Output {
        Timestamp {
            utc: self.utc + rhs.as_chrono_duration(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    #[test]
    fn conversions() {
        let v = Velocity::from_kilometers_per_second(7.5);
        assert_relative_eq!(v.as_kilometers_per_hour(), 27000.0);
        assert_relative_eq!(v.as_miles_per_hour(), 27000.0 * 0.621371);
        assert_relative_eq!(v.as_miles_per_second(), 7.5 * 0.621371);

        let l = Length::from_kilometers(400.0);
        assert_relative_eq!(l.as_miles(), 248.5484, epsilon = 1e-9);
        assert_relative_eq!(l.as_meters(), 400_000.0);
    }

    #[test]
    fn angle_wrapping() {
        assert_relative_eq!(Angle::from_degrees(-90.0).normalized().as_degrees(), 270.0);
        assert_relative_eq!(Angle::from_degrees(720.5).normalized().as_degrees(), 0.5);
        assert_eq!(Angle::from_degrees(-1e-20).normalized().as_degrees(), 0.0);
        assert_relative_eq!(
            Angle::from_degrees(359.0).normalized_signed().as_degrees(),
            -1.0
        );
        assert_relative_eq!(
            Angle::from_degrees(180.0).normalized_signed().as_degrees(),
            -180.0
        );
        assert_relative_eq!(
            (Angle::from_degrees(-179.5) - Angle::from_degrees(179.5))
                .normalized_signed()
                .as_degrees(),
            1.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn timestamp_arithmetic() {
        let t0 = Timestamp::from_utc(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let t1 = t0 + Time::from_secs(90.0);
        assert_relative_eq!((t1 - t0).as_secs(), 90.0);
        let t2 = t1 + Time::from_millis(100.0);
        assert_relative_eq!((t2 - t0).as_secs(), 90.1);
        assert_relative_eq!((t0 - t2).as_secs(), -90.1);
        // Offsets round to whole microseconds
        assert_eq!(t0 + Time::from_secs(4e-7), t0);
        assert_relative_eq!(Length::from_meters(1500.0).as_kilometers(), 1.5);
        assert_relative_eq!((Time::from_secs(3.0) / 2.0).as_secs(), 1.5);
        assert_relative_eq!(
            Time::from_std_duration(std::time::Duration::from_millis(250)).as_secs(),
            0.25
        );
    }
}
