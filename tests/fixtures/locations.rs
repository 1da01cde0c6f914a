//! Real locations for realistic test fixtures.
//!
//! Las Vegas coordinates sourced from OpenStreetMap via Overpass API.

use geopath::LatLng;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

impl LatLng for Location {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }
}

// ============================================================================
// Las Vegas Strip (dense, small deltas)
// ============================================================================

pub const STRIP: &[Location] = &[
    Location::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Location::new("Encore at Wynn", 36.1289345, -115.1653620),
    Location::new("Caesars Palace", 36.1162, -115.1745),
    Location::new("Bellagio", 36.1126, -115.1767),
    Location::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Location::new("MGM Grand", 36.1023654, -115.1688720),
    Location::new("Charlie Palmer Steak", 36.0910624, -115.1743364),
    Location::new("Strip Steak", 36.0908722, -115.1776176),
];

// ============================================================================
// World cities (large deltas, both hemispheres)
// ============================================================================

pub const WORLD_CITIES: &[Location] = &[
    Location::new("Las Vegas", 36.17, -115.14),
    Location::new("Los Angeles", 34.05, -118.24),
    Location::new("Sydney", -33.8688, 151.2093),
    Location::new("Tokyo", 35.6762, 139.6503),
    Location::new("London", 51.5074, -0.1278),
    Location::new("Buenos Aires", -34.6037, -58.3816),
    Location::new("Cape Town", -33.9249, 18.4241),
    Location::new("Reykjavik", 64.1466, -21.9426),
];

// ============================================================================
// Boundary points
// ============================================================================

pub const EXTREMES: &[Location] = &[
    Location::new("North Pole", 90.0, 0.0),
    Location::new("South Pole", -90.0, 0.0),
    Location::new("Antimeridian East", 0.0, 180.0),
    Location::new("Antimeridian West", 0.0, -180.0),
    Location::new("Suva", -18.1416, 178.4419),
    Location::new("Apia", -13.8507, -171.7514),
];

pub fn all_locations() -> Vec<Location> {
    STRIP
        .iter()
        .chain(WORLD_CITIES)
        .chain(EXTREMES)
        .cloned()
        .collect()
}
