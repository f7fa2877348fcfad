//! Coordinate classification and range validation.

use std::fmt::{Display, Formatter};

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::GeoparseError;

/// Which semantic bounds apply to a coordinate value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum CoordinateKind {
    /// North-south axis, bounded by the poles.
    Latitude,
    /// East-west axis, bounded by the antimeridian.
    Longitude,
    /// Axis unknown; the longitude interval is used as a sanity bound.
    #[default]
    Unclassified,
}

impl CoordinateKind {
    /// Inclusive bounds for values of this kind, in decimal degrees.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            CoordinateKind::Latitude => (-90.0, 90.0),
            CoordinateKind::Longitude | CoordinateKind::Unclassified => (-180.0, 180.0),
        }
    }

    /// Returns the value unchanged if it lies within the bounds for this
    /// kind, and a range error naming the kind and the interval otherwise.
    pub fn validate(&self, value: Decimal) -> Result<Decimal, GeoparseError> {
        self.check(value.to_f64().unwrap_or(f64::NAN))?;
        Ok(value)
    }

    /// The same range check for plain floating-point values.
    pub(crate) fn check(&self, value: f64) -> Result<f64, GeoparseError> {
        let (min, max) = self.bounds();
        if value >= min && value <= max {
            Ok(value)
        } else {
            Err(GeoparseError::OutOfRange { kind: *self, value })
        }
    }

    pub(crate) fn range_qualifier(&self) -> &'static str {
        match self {
            CoordinateKind::Unclassified => "reasonable",
            _ => "valid",
        }
    }

    pub(crate) fn interval(&self) -> &'static str {
        match self {
            CoordinateKind::Latitude => "[-90, 90]",
            CoordinateKind::Longitude | CoordinateKind::Unclassified => "[-180, 180]",
        }
    }
}

impl Display for CoordinateKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateKind::Latitude => write!(f, "latitude"),
            CoordinateKind::Longitude => write!(f, "longitude"),
            CoordinateKind::Unclassified => write!(f, "coordinate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn latitude_bounds() {
        let kind = CoordinateKind::Latitude;
        assert!(kind.validate(Decimal::new(900, 1)).is_ok());
        assert!(kind.validate(Decimal::new(-900, 1)).is_ok());

        assert_matches!(
            kind.validate(Decimal::new(950, 1)),
            Err(GeoparseError::OutOfRange {
                kind: CoordinateKind::Latitude,
                ..
            })
        );
    }

    #[test]
    fn longitude_bounds() {
        let kind = CoordinateKind::Longitude;
        assert!(kind.validate(Decimal::from(180)).is_ok());
        assert!(kind.validate(Decimal::from(-180)).is_ok());
        assert_matches!(
            kind.validate(Decimal::from(185)),
            Err(GeoparseError::OutOfRange { .. })
        );
    }

    #[test]
    fn unclassified_uses_longitude_interval() {
        let kind = CoordinateKind::Unclassified;
        assert!(kind.validate(Decimal::from(120)).is_ok());

        let error = kind.validate(Decimal::from(190)).expect_err("out of bounds");
        assert_eq!(
            error.to_string(),
            "coordinate 190 is outside reasonable range [-180, 180]"
        );
    }

    #[test]
    fn range_error_names_the_kind() {
        let error = CoordinateKind::Latitude
            .validate(Decimal::from(95))
            .expect_err("out of bounds");
        assert_eq!(
            error.to_string(),
            "latitude 95 is outside valid range [-90, 90]"
        );
    }
}
