//! Inverse Transverse Mercator projection for UTM coordinates.

use crate::datum::Datum;
use crate::error::GeoparseError;
use crate::kind::CoordinateKind;
use crate::point::GeodeticPoint;
use crate::utm::UtmZone;

/// UTM central scale factor.
const SCALE_FACTOR: f64 = 0.9996;
/// Offset added to easting values so they stay positive across a zone.
const FALSE_EASTING: f64 = 500_000.0;
/// Offset added to northing values in the southern hemisphere.
const FALSE_NORTHING: f64 = 10_000_000.0;

/// Converts UTM coordinates to a geodetic latitude/longitude pair on the
/// WGS84 ellipsoid.
///
/// `zone_letter` is case-insensitive; bands N through W denote the northern
/// hemisphere. With `validate` set, the converted coordinates are checked
/// against the geodetic bounds and an out-of-range result is an error.
///
/// The inverse projection is the closed-form series approximation: the
/// footprint latitude comes from a four-term expansion in the third
/// flattening, and the latitude/longitude corrections run through the sixth
/// power of the transverse distance ratio. Accuracy is well below a meter
/// over the valid easting/northing range.
pub fn utm_to_lat_lon(
    zone_number: u32,
    zone_letter: char,
    easting: f64,
    northing: f64,
    validate: bool,
) -> Result<GeodeticPoint, GeoparseError> {
    let zone = UtmZone::new(zone_number, zone_letter)?;
    let datum = Datum::WGS84;

    let a = datum.semimajor();
    let e_sq = datum.eccentricity_sq();
    let ep_sq = datum.second_eccentricity_sq();

    let x = easting - FALSE_EASTING;
    let y = if zone.is_northern() {
        northing
    } else {
        northing - FALSE_NORTHING
    };

    // Meridional arc distance and the footprint latitude.
    let m = y / SCALE_FACTOR;
    let mu =
        m / (a * (1.0 - e_sq / 4.0 - 3.0 * e_sq.powi(2) / 64.0 - 5.0 * e_sq.powi(3) / 256.0));

    let e1 = (1.0 - (1.0 - e_sq).sqrt()) / (1.0 + (1.0 - e_sq).sqrt());
    let j1 = 3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0;
    let j2 = 21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0;
    let j3 = 151.0 * e1.powi(3) / 96.0;
    let j4 = 1097.0 * e1.powi(4) / 512.0;

    let fp = mu
        + j1 * (2.0 * mu).sin()
        + j2 * (4.0 * mu).sin()
        + j3 * (6.0 * mu).sin()
        + j4 * (8.0 * mu).sin();

    // Correction terms at the footprint latitude.
    let c1 = ep_sq * fp.cos().powi(2);
    let t1 = fp.tan().powi(2);
    let r1 = a * (1.0 - e_sq) / (1.0 - e_sq * fp.sin().powi(2)).powf(1.5);
    let n1 = a / (1.0 - e_sq * fp.sin().powi(2)).sqrt();
    let d = x / (n1 * SCALE_FACTOR);

    let q1 = n1 * fp.tan() / r1;
    let q2 = d.powi(2) / 2.0;
    let q3 = (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1.powi(2) - 9.0 * ep_sq) * d.powi(4) / 24.0;
    let q4 = (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1.powi(2) - 252.0 * ep_sq
        - 3.0 * c1.powi(2))
        * d.powi(6)
        / 720.0;

    let lat = (fp - q1 * (q2 - q3 + q4)).to_degrees();

    let q5 = d;
    let q6 = (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0;
    let q7 = (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1.powi(2) + 8.0 * ep_sq
        + 24.0 * t1.powi(2))
        * d.powi(5)
        / 120.0;

    let lon = (zone.central_meridian().to_radians() + (q5 - q6 + q7) / fp.cos()).to_degrees();

    if validate {
        // The caller gets a single transform-level failure, not the
        // field-specific range message.
        CoordinateKind::Latitude
            .check(lat)
            .map_err(|_| GeoparseError::ConvertedOutOfRange)?;
        CoordinateKind::Longitude
            .check(lon)
            .map_err(|_| GeoparseError::ConvertedOutOfRange)?;
    }

    Ok(GeodeticPoint::latlon(lat, lon))
}
