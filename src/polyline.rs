//! Encoded polyline codec for route geometries.
//!
//! Paths travel between services as compact ASCII strings in the published
//! polyline format: each ordinate is quantized to 1e-5 degrees, delta
//! encoded against the previous point, zig-zag mapped, and written as
//! 5-bit chunks offset by 63. `Polyline` holds the decoded form; encoding
//! and decoding happen at the boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::{Error, MalformedKind, Result};
use crate::traits::LatLng;

/// Degrees are quantized to this many units per degree.
const FACTOR: f64 = 1e5;

/// Added to every 5-bit chunk so the output is printable ASCII.
const CHAR_OFFSET: u8 = 63;

/// Set on every chunk but the last of a codeword.
const CONTINUATION: u64 = 0x20;

const CHUNK_MASK: u64 = 0x1f;

/// Encodes an ordered path of points into a polyline string.
///
/// Accepts anything that reports a latitude and longitude: coordinates,
/// plain `LatLngLiteral` records, (lat, lng) tuples, or references to them.
/// An empty path encodes to an empty string.
pub fn encode_path<I>(path: I) -> String
where
    I: IntoIterator,
    I::Item: LatLng,
{
    let mut encoded = String::new();
    let mut previous = (0i64, 0i64);

    for point in path {
        let current = (quantize(point.lat()), quantize(point.lng()));
        encode_value(current.0 - previous.0, &mut encoded);
        encode_value(current.1 - previous.1, &mut encoded);
        previous = current;
    }

    encoded
}

/// Decodes a polyline string into coordinates.
///
/// Decoded values are the scaled integers divided back into degrees; they
/// are not re-normalized. Dividing by 1e5 rather than multiplying by 1e-5
/// gives the correctly rounded value, which can differ from other decoders
/// in the last bit. Decoding is all-or-nothing: any malformed input
/// fails with [`Error::MalformedPolyline`] and no points are returned.
pub fn decode_path(encoded: &str) -> Result<Vec<Coordinate>> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::with_capacity(bytes.len() / 2);
    let mut index = 0;
    let mut lat = 0i64;
    let mut lng = 0i64;

    while index < bytes.len() {
        lat = accumulate(lat, bytes, &mut index).inspect_err(log_malformed)?;
        lng = accumulate(lng, bytes, &mut index).inspect_err(log_malformed)?;
        points.push(Coordinate::new_unchecked(
            lat as f64 / FACTOR,
            lng as f64 / FACTOR,
        ));
    }

    Ok(points)
}

fn quantize(degrees: f64) -> i64 {
    round_half_up(degrees * FACTOR) as i64
}

/// Rounds to the nearest integer, ties toward +∞ (so -0.5 becomes 0),
/// matching the published encoders byte for byte.
fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if value - rounded == 0.5 { rounded + 1.0 } else { rounded }
}

fn encode_value(delta: i64, out: &mut String) {
    // Zig-zag: sign goes to the low bit.
    let zigzag = if delta < 0 { !(delta << 1) } else { delta << 1 };
    let mut value = zigzag as u64;

    while value >= CONTINUATION {
        out.push(char::from((CONTINUATION | (value & CHUNK_MASK)) as u8 + CHAR_OFFSET));
        value >>= 5;
    }
    out.push(char::from(value as u8 + CHAR_OFFSET));
}

/// Reads one codeword starting at `index`, leaving `index` just past it.
fn decode_value(bytes: &[u8], index: &mut usize) -> Result<i64> {
    let mut result = 0u64;
    let mut shift = 0u32;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(Error::malformed(*index, MalformedKind::Truncated));
        };
        let chunk = match byte.checked_sub(CHAR_OFFSET) {
            Some(chunk) if chunk < 0x40 => u64::from(chunk),
            _ => return Err(Error::malformed(*index, MalformedKind::InvalidCharacter(byte))),
        };
        if shift >= u64::BITS || (shift > 0 && (chunk & CHUNK_MASK) >> (u64::BITS - shift) != 0) {
            return Err(Error::malformed(*index, MalformedKind::Overflow));
        }

        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        *index += 1;

        if chunk < CONTINUATION {
            break;
        }
    }

    let half = (result >> 1) as i64;
    Ok(if result & 1 == 1 { !half } else { half })
}

fn accumulate(total: i64, bytes: &[u8], index: &mut usize) -> Result<i64> {
    let delta = decode_value(bytes, index)?;
    total
        .checked_add(delta)
        .ok_or_else(|| Error::malformed(*index, MalformedKind::Overflow))
}

fn log_malformed(err: &Error) {
    tracing::debug!(error = %err, "rejecting malformed polyline");
}

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores coordinates directly for internal processing. Use
/// [`Polyline::encode`] / [`Polyline::decode`] (or `Display` / `FromStr`)
/// to move to and from the compact string form at API boundaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes a polyline string.
    pub fn decode(encoded: &str) -> Result<Self> {
        decode_path(encoded).map(Self::new)
    }

    /// Encodes the points into a polyline string.
    pub fn encode(&self) -> String {
        encode_path(&self.points)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Coordinate>> for Polyline {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Coordinate> for Polyline {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Writes the encoded form.
impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Polyline {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}
