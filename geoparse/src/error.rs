//! Error types used by the crate.

use thiserror::Error;

use crate::kind::CoordinateKind;

/// Geoparse error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoparseError {
    /// The text does not match any recognized coordinate grammar.
    #[error("{0:?} is not a valid coordinate string")]
    InvalidCoordinate(String),

    /// A hemisphere suffix other than N, S, E or W.
    #[error("invalid hemisphere '{0}', must be N, S, E, or W")]
    InvalidHemisphere(char),

    /// Fractional degrees combined with smaller components.
    #[error("fractional degrees cannot be combined with {0}")]
    FractionalDegrees(&'static str),

    /// Two fractional fields in a degrees-minutes pair.
    #[error("decimal values in multiple fields not allowed for degrees-minutes format")]
    MultipleDecimalFields,

    /// A minutes or seconds field at or above 60.
    #[error("{component} {value} must be less than 60")]
    ComponentOutOfRange {
        /// Which sexagesimal field overflowed.
        component: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A coordinate outside the bounds for its kind.
    #[error("{kind} {value} is outside {} range {}", .kind.range_qualifier(), .kind.interval())]
    OutOfRange {
        /// Which bounds were applied.
        kind: CoordinateKind,
        /// The offending value in decimal degrees.
        value: f64,
    },

    /// A UTM zone number outside 1..=60.
    #[error("UTM zone number {0} must be between 1 and 60")]
    InvalidZoneNumber(u32),

    /// A letter that is not a UTM latitude band.
    #[error("UTM zone letter '{0}' is invalid")]
    InvalidZoneLetter(char),

    /// The UTM transform produced coordinates outside the geodetic bounds.
    #[error("converted coordinates are outside valid ranges")]
    ConvertedOutOfRange,

    /// Wrong number of components passed to the degree combiner.
    #[error("invalid number of arguments: expected 1 to 3, got {0}")]
    InvalidArgumentCount(usize),
}
