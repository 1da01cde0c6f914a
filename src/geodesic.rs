//! Great-circle (geodesic) interpolation between two points.

use crate::coordinate::Coordinate;
use crate::haversine::central_angle;
use crate::traits::LatLng;

/// Default number of segments; yields 61 points including both ends.
const DEFAULT_SEGMENTS: usize = 60;

#[derive(Debug, Clone)]
pub struct GeodesicOptions {
    /// Number of equal arcs between start and end. The path has
    /// `segments + 1` points.
    pub segments: usize,
}

impl Default for GeodesicOptions {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Samples 61 points along the great circle from `start` to `end`.
pub fn geodesic_polyline<A: LatLng, B: LatLng>(start: &A, end: &B) -> Vec<Coordinate> {
    geodesic_polyline_with(start, end, &GeodesicOptions::default())
}

/// Samples `options.segments + 1` points along the great circle from
/// `start` to `end`, both ends included.
///
/// Points are spherically interpolated (slerp) between the two unit
/// vectors. Coincident endpoints yield copies of `start`. Antipodal
/// endpoints have no unique great circle and give an arbitrary one.
pub fn geodesic_polyline_with<A: LatLng, B: LatLng>(
    start: &A,
    end: &B,
    options: &GeodesicOptions,
) -> Vec<Coordinate> {
    let d = central_angle(start, end);
    let count = options.segments + 1;
    tracing::trace!(central_angle = d, count, "interpolating great circle");

    if d == 0.0 || options.segments == 0 {
        let first = Coordinate::from_latlng(start);
        return vec![first; count];
    }

    let from = unit_vector(start);
    let to = unit_vector(end);
    let sin_d = d.sin();

    (0..count)
        .map(|n| {
            let f = round_fraction(n as f64 / options.segments as f64);
            let a = ((1.0 - f) * d).sin() / sin_d;
            let b = (f * d).sin() / sin_d;

            let x = a * from[0] + b * to[0];
            let y = a * from[1] + b * to[1];
            let z = a * from[2] + b * to[2];

            let lat = z.atan2((x * x + y * y).sqrt());
            let lng = y.atan2(x);
            Coordinate::new(lat.to_degrees(), lng.to_degrees())
        })
        .collect()
}

/// Fractions are rounded to 6 decimals so sample positions are reproducible.
fn round_fraction(f: f64) -> f64 {
    (f * 1e6).round() / 1e6
}

fn unit_vector<P: LatLng>(point: &P) -> [f64; 3] {
    let lat = point.lat().to_radians();
    let lng = point.lng().to_radians();
    [lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin()]
}
