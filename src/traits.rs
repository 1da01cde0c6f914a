//! Core domain traits for geographic points.
//!
//! The codec and interpolator only need to read a latitude and a longitude,
//! so anything that can report both is accepted. Concrete apps can implement
//! `LatLng` for their own data models.

use serde::{Deserialize, Serialize};

/// Something that sits at a latitude/longitude, in degrees.
pub trait LatLng {
    /// Latitude in degrees.
    fn lat(&self) -> f64;

    /// Longitude in degrees.
    fn lng(&self) -> f64;
}

impl<T: LatLng + ?Sized> LatLng for &T {
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    fn lng(&self) -> f64 {
        (**self).lng()
    }
}

/// (lat, lng) tuples, the shape used throughout route geometries.
impl LatLng for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }

    fn lng(&self) -> f64 {
        self.1
    }
}

/// Plain-field latitude/longitude record.
///
/// This is the shape JSON payloads from mapping services usually carry
/// (`{"lat": .., "lng": ..}`). Values are stored as given; convert into a
/// [`Coordinate`](crate::Coordinate) to normalize them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngLiteral {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude")]
    pub lng: f64,
}

impl LatLngLiteral {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl LatLng for LatLngLiteral {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }
}
