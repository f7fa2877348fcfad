//! Geoparse turns human-written geographic coordinates into signed decimal
//! degrees. Coordinate text arrives in wildly different shapes depending on
//! who typed it and which tool exported it; this crate recognizes the common
//! ones without being told the format in advance:
//!
//! * decimal degrees: `23.43`, `-45.21`, `23.43 N`, `W 45.21`
//! * degrees and decimal minutes: `23° 25.800'`, `-45 12.600`
//! * degrees, minutes and seconds: `23° 25' 48.0" N`, `S 45 12 36.0`
//! * maritime shorthand: `40°–41.65'N`, `54-05.48N`, `30°34.4'N`,
//!   `30°34'24.0"N`
//! * UTM grid references: `33N 0594934 5810062`, `Zone 18S 0377299 1483035`,
//!   `33N594934E5810062N`
//!
//! Free-form text goes through [`parse_coordinate`], which returns an exact
//! [`Decimal`](rust_decimal::Decimal) whose sign encodes the hemisphere
//! (negative is south or west). UTM text goes through
//! [`parse_utm_coordinate`], which runs the inverse Transverse Mercator
//! projection on the WGS84 ellipsoid; [`utm_to_lat_lon`] exposes the
//! transform directly for callers that already hold the zone and the
//! projected coordinates.
//!
//! ```
//! use geoparse::{parse_coordinate, parse_utm_coordinate, CoordinateKind};
//! use rust_decimal::Decimal;
//!
//! let lat = parse_coordinate("23.43 N", CoordinateKind::Latitude, true).unwrap();
//! assert_eq!(lat, Some(Decimal::new(2343, 2)));
//!
//! let point = parse_utm_coordinate("33N 391545 5819698", true).unwrap();
//! assert!((point.lat() - 52.5163).abs() < 0.01);
//! ```
//!
//! All operations are pure and synchronous: no I/O, no shared state, every
//! call allocates its own result. Failure behavior differs by entry point:
//! [`parse_coordinate`] reports malformed text as an error, while the UTM
//! parsers degrade to `None` for anything they cannot handle.

mod datum;
mod degrees;
mod error;
mod freeform;
mod hemisphere;
mod kind;
mod point;
pub mod utm;

pub use datum::Datum;
pub use degrees::to_decimal_degrees;
pub use error::GeoparseError;
pub use freeform::{parse_coordinate, CoordinateInput};
pub use hemisphere::Hemisphere;
pub use kind::CoordinateKind;
pub use point::GeodeticPoint;
pub use utm::{parse_utm_coordinate, parse_utm_coordinate_single, utm_to_lat_lon, UtmZone};
