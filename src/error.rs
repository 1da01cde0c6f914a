//! Errors raised by coordinate parsing and polyline decoding.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Encapsulates all errors that can occur in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A latitude or longitude string could not be read as a finite number.
    #[error("invalid {field} {value:?}: expected a finite number")]
    InvalidCoordinate {
        /// Either `"latitude"` or `"longitude"`.
        field: &'static str,
        value: String,
    },
    /// An encoded polyline could not be decoded.
    #[error("malformed polyline at byte {position}: {kind}")]
    MalformedPolyline { position: usize, kind: MalformedKind },
}

/// Describes why an encoded polyline was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedKind {
    /// A byte outside the `?`..=`~` range (63..=126).
    #[error("invalid character 0x{0:02x}")]
    InvalidCharacter(u8),
    /// The input ended inside a codeword, or after a latitude with no longitude.
    #[error("input ends mid-codeword")]
    Truncated,
    /// A codeword carried more bits than fit in 64.
    #[error("codeword too long")]
    Overflow,
}

impl Error {
    pub(crate) fn invalid_coordinate(field: &'static str, value: &str) -> Self {
        Error::InvalidCoordinate {
            field,
            value: value.to_owned(),
        }
    }

    pub(crate) fn malformed(position: usize, kind: MalformedKind) -> Self {
        Error::MalformedPolyline { position, kind }
    }
}
