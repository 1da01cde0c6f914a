//! Haversine central angle between two points.
//!
//! Great-circle math for the geodesic interpolator. Works on the unit
//! sphere, so results are angles in radians rather than distances.

use crate::traits::LatLng;

/// Central angle between two points, in radians.
///
/// Ranges over `[0, π]`. Identical points give exactly `0.0`.
pub fn central_angle<A: LatLng, B: LatLng>(from: &A, to: &B) -> f64 {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let delta_lat = lat1 - lat2;
    let delta_lng = from.lng().to_radians() - to.lng().to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);

    // Rounding can push `a` a hair past 1 near antipodes.
    2.0 * a.clamp(0.0, 1.0).sqrt().asin()
}
