//! Combining sexagesimal components into decimal degrees.

use crate::error::GeoparseError;

/// Combines degrees, minutes and seconds into decimal degrees.
///
/// Takes one to three values, interpreted positionally as degrees, minutes
/// and seconds; the result is `d + m/60 + s/3600`. Components are assumed
/// non-negative and hemisphere-unsigned; sign application and range
/// validation are the caller's concern.
pub fn to_decimal_degrees(parts: &[f64]) -> Result<f64, GeoparseError> {
    match *parts {
        [degrees] => Ok(degrees),
        [degrees, minutes] => Ok(degrees + minutes / 60.0),
        [degrees, minutes, seconds] => Ok(degrees + minutes / 60.0 + seconds / 3600.0),
        _ => Err(GeoparseError::InvalidArgumentCount(parts.len())),
    }
}
