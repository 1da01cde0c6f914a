//! Normalized latitude/longitude value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::traits::{LatLng, LatLngLiteral};

/// A point on Earth's surface, in degrees.
///
/// Latitude is clamped to `[-90, 90]`. Longitude is wrapped into
/// `[-180, 180)`, except that exactly `180` is kept as `180`. Values just
/// above 180 still wrap to just above -180.
///
/// Read the values through [`LatLng`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "LatLngLiteral", into = "LatLngLiteral")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Creates a normalized coordinate.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: clamp_latitude(lat),
            lng: wrap_longitude(lng),
        }
    }

    /// Creates a coordinate from raw values without normalizing them.
    ///
    /// Decoded polylines use this: their values are scaled integers, not
    /// re-normalized.
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a normalized coordinate from numeric strings.
    ///
    /// Surrounding whitespace is ignored. Empty, unparsable, and non-finite
    /// values are rejected.
    pub fn parse(lat: &str, lng: &str) -> Result<Self> {
        let lat = parse_degrees("latitude", lat)?;
        let lng = parse_degrees("longitude", lng)?;
        Ok(Self::new(lat, lng))
    }

    /// Copies the fields of any point, then normalizes them.
    pub fn from_latlng<P: LatLng>(point: &P) -> Self {
        Self::new(point.lat(), point.lng())
    }
}

impl LatLng for Coordinate {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<LatLngLiteral> for Coordinate {
    fn from(literal: LatLngLiteral) -> Self {
        Self::new(literal.lat, literal.lng)
    }
}

impl From<Coordinate> for LatLngLiteral {
    fn from(coordinate: Coordinate) -> Self {
        LatLngLiteral::new(coordinate.lat, coordinate.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Parses `"lat,lng"`.
impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(',') {
            Some((lat, lng)) => Self::parse(lat, lng),
            None => Err(Error::invalid_coordinate("longitude", s)),
        }
    }
}

fn parse_degrees(field: &'static str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            tracing::debug!(field, raw, "rejecting unparsable coordinate");
            Err(Error::invalid_coordinate(field, raw))
        }
    }
}

fn clamp_latitude(lat: f64) -> f64 {
    lat.clamp(-90.0, 90.0)
}

fn wrap_longitude(lng: f64) -> f64 {
    // 180 is kept as-is, 180 + ε is not.
    if lng == 180.0 || (-180.0..180.0).contains(&lng) {
        return lng;
    }
    // Double modulo keeps tiny negative remainders from landing on 360.
    ((lng + 180.0) % 360.0 + 360.0) % 360.0 - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_latitude_clamped() {
        assert_eq!(Coordinate::new(95.0, 0.0).lat(), 90.0);
        assert_eq!(Coordinate::new(-95.0, 0.0).lat(), -90.0);
        assert_eq!(Coordinate::new(45.25, 0.0).lat(), 45.25);
    }

    #[test]
    fn test_longitude_wraps() {
        assert!((Coordinate::new(0.0, 190.0).lng() - -170.0).abs() < EPS);
        assert!((Coordinate::new(0.0, -190.0).lng() - 170.0).abs() < EPS);
        assert!((Coordinate::new(0.0, 540.0).lng() - -180.0).abs() < EPS);
        assert_eq!(Coordinate::new(0.0, -180.0).lng(), -180.0);
        assert_eq!(Coordinate::new(0.0, -120.2).lng(), -120.2);
    }

    #[test]
    fn test_longitude_180_preserved() {
        assert_eq!(Coordinate::new(0.0, 180.0).lng(), 180.0);
    }

    #[test]
    fn test_longitude_just_past_180_wraps() {
        let lng = Coordinate::new(0.0, 180.5).lng();
        assert!((lng - -179.5).abs() < EPS, "got {}", lng);
    }

    #[test]
    fn test_new_unchecked_keeps_raw() {
        let c = Coordinate::new_unchecked(95.0, 190.0);
        assert_eq!((c.lat(), c.lng()), (95.0, 190.0));
    }

    #[test]
    fn test_parse_strings() {
        let c = Coordinate::parse(" 38.5", "-120.2 ").unwrap();
        assert_eq!(c, Coordinate::new(38.5, -120.2));

        let c = Coordinate::parse("100", "190").unwrap();
        assert_eq!(c.lat(), 90.0);
        assert!((c.lng() - -170.0).abs() < EPS);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = Coordinate::parse("abc", "1").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCoordinate {
                field: "latitude",
                value: "abc".to_string()
            }
        );
        assert!(matches!(
            Coordinate::parse("1", "").unwrap_err(),
            Error::InvalidCoordinate { field: "longitude", .. }
        ));
        assert!(Coordinate::parse("NaN", "1").is_err());
        assert!(Coordinate::parse("1", "inf").is_err());
    }

    #[test]
    fn test_from_latlng_normalizes() {
        let literal = LatLngLiteral::new(-95.0, 190.0);
        let c = Coordinate::from_latlng(&literal);
        assert_eq!(c.lat(), -90.0);
        assert!((c.lng() - -170.0).abs() < EPS);
    }

    #[test]
    fn test_from_str_and_display() {
        let c: Coordinate = "43.252,-126.453".parse().unwrap();
        assert_eq!(c, Coordinate::new(43.252, -126.453));
        assert_eq!(c.to_string(), "43.252,-126.453");
        assert!("43.252".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_serde_normalizes_on_the_way_in() {
        let c: Coordinate = serde_json::from_str(r#"{"latitude": 95, "longitude": 180}"#).unwrap();
        assert_eq!(c, Coordinate::new_unchecked(90.0, 180.0));

        let json = serde_json::to_string(&Coordinate::new(1.5, 2.5)).unwrap();
        assert_eq!(json, r#"{"lat":1.5,"lng":2.5}"#);
    }
}
