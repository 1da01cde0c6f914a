//! Test fixtures for geopath.
//!
//! Provides real-world locations, from a dense city cluster out to points
//! near the poles and the antimeridian.

pub mod locations;

pub use locations::*;
