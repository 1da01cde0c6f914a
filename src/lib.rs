//! geopath core
//!
//! Coordinate normalization, the encoded polyline codec, and great-circle
//! interpolation between two points.

pub mod traits;
pub mod error;
pub mod coordinate;
pub mod polyline;
pub mod haversine;
pub mod geodesic;

pub use coordinate::Coordinate;
pub use error::{Error, MalformedKind, Result};
pub use geodesic::{geodesic_polyline, geodesic_polyline_with, GeodesicOptions};
pub use polyline::{decode_path, encode_path, Polyline};
pub use traits::{LatLng, LatLngLiteral};
