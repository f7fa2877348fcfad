//! Recognizing UTM grid reference text.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use crate::kind::CoordinateKind;
use crate::point::GeodeticPoint;
use crate::utm::transform::utm_to_lat_lon;
use crate::utm::ZONE_LETTERS;

lazy_static! {
    /// Grid reference layouts, tried in order. Every pattern is anchored to
    /// consume the whole (upper-cased) input.
    static ref GRID_LAYOUTS: [Regex; 3] = [
        // "33N 391545 5819698", optionally prefixed with "ZONE "
        Regex::new(&format!(
            r"^(?:ZONE\s+)?(\d{{1,2}})([{ZONE_LETTERS}])\s+(\d{{6,7}})\s+(\d{{7,8}})$"
        ))
        .expect("invalid UTM grid pattern"),
        // compact "33N391545E5819698N"
        Regex::new(&format!(
            r"^(\d{{1,2}})([{ZONE_LETTERS}])(\d{{6,7}})E(\d{{7,8}})N$"
        ))
        .expect("invalid UTM grid pattern"),
        // "33 N 391545 5819698", zone number and letter separated
        Regex::new(&format!(
            r"^(?:ZONE\s+)?(\d{{1,2}})\s+([{ZONE_LETTERS}])\s+(\d{{6,7}})\s+(\d{{7,8}})$"
        ))
        .expect("invalid UTM grid pattern"),
    ];
}

/// Parses a UTM grid reference and converts it to latitude/longitude.
///
/// Accepted layouts: `33N 391545 5819698`, `Zone 33N 391545 5819698`,
/// `33 N 391545 5819698`, and the compact `33N391545E5819698N`; matching is
/// case-insensitive. Returns `None` both when the text is not UTM-shaped
/// and when the extracted zone or the converted coordinates are invalid;
/// the two cases are deliberately indistinguishable here.
pub fn parse_utm_coordinate(text: &str, validate: bool) -> Option<GeodeticPoint> {
    let normalized = text.trim().to_uppercase();

    for layout in GRID_LAYOUTS.iter() {
        let Some(captures) = layout.captures(&normalized) else {
            continue;
        };

        let zone_number = captures[1].parse::<u32>().ok()?;
        let zone_letter = captures[2].chars().next()?;
        let easting = captures[3].parse::<f64>().ok()?;
        let northing = captures[4].parse::<f64>().ok()?;

        return match utm_to_lat_lon(zone_number, zone_letter, easting, northing, validate) {
            Ok(point) => Some(point),
            Err(error) => {
                log::debug!("UTM text {text:?} rejected: {error}");
                None
            }
        };
    }

    None
}

/// Parses a UTM grid reference and returns a single axis in decimal degrees.
///
/// `CoordinateKind::Longitude` selects the longitude; any other kind
/// selects the latitude. Parse failures propagate as `None`, the same as
/// [`parse_utm_coordinate`].
pub fn parse_utm_coordinate_single(
    text: &str,
    axis: CoordinateKind,
    validate: bool,
) -> Option<Decimal> {
    let point = parse_utm_coordinate(text, validate)?;
    let value = match axis {
        CoordinateKind::Longitude => point.lon(),
        _ => point.lat(),
    };

    Decimal::from_str(&value.to_string()).ok()
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::*;

    use super::*;

    #[test]
    fn parses_all_layouts() {
        // Berlin (33N) and São Paulo (23K) reference points.
        let cases: &[(&str, f64, f64)] = &[
            ("33N 391545 5819698", 52.5163, 13.3777),
            ("23K 332398 7395850", -23.5475, -46.6361),
            ("Zone 33N 391545 5819698", 52.5163, 13.3777),
            ("ZONE 23K 332398 7395850", -23.5475, -46.6361),
            ("33 N 391545 5819698", 52.5163, 13.3777),
            ("23 K 332398 7395850", -23.5475, -46.6361),
            ("33N391545E5819698N", 52.5163, 13.3777),
            ("23K332398E7395850N", -23.5475, -46.6361),
        ];

        for (text, lat, lon) in cases {
            let point = parse_utm_coordinate(text, true)
                .unwrap_or_else(|| panic!("failed to parse {text:?}"));
            assert!((point.lat() - lat).abs() < 0.1, "latitude mismatch for {text:?}");
            assert!((point.lon() - lon).abs() < 0.1, "longitude mismatch for {text:?}");
        }
    }

    #[test]
    fn layouts_agree_with_each_other() {
        let reference = parse_utm_coordinate("33N 391545 5819698", true).expect("valid UTM");
        for text in ["Zone 33N 391545 5819698", "33N391545E5819698N"] {
            let point = parse_utm_coordinate(text, true).expect("valid UTM");
            assert!((point.lat() - reference.lat()).abs() < 1e-10);
            assert!((point.lon() - reference.lon()).abs() < 1e-10);
        }
    }

    #[test]
    fn unparseable_text_degrades_to_none() {
        let cases = [
            "invalid string",
            "33X 391545 5819698",
            "33I 391545 5819698",
            "33O 391545 5819698",
            "61N 391545 5819698",
            "0N 391545 5819698",
            // easting too short
            "33N 91545 5819698",
            // northing too short
            "33N 391545 819698",
            // compact layout missing or mangling the final N
            "33N391545E5819698",
            "33N391545E5819698X",
            "",
            "   ",
        ];

        for text in cases {
            assert_eq!(parse_utm_coordinate(text, true), None, "accepted {text:?}");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let reference = parse_utm_coordinate("33N 391545 5819698", true).expect("valid UTM");
        for text in [
            "33n 391545 5819698",
            "zone 33n 391545 5819698",
            "ZONE 33N 391545 5819698",
            "33n391545e5819698n",
        ] {
            let point = parse_utm_coordinate(text, true).expect("valid UTM");
            assert!((point.lat() - reference.lat()).abs() < 1e-10);
            assert!((point.lon() - reference.lon()).abs() < 1e-10);
        }
    }

    #[test]
    fn every_band_letter_parses() {
        for letter in ZONE_LETTERS.chars() {
            let text = format!("33{letter} 391545 5819698");
            assert!(
                parse_utm_coordinate(&text, true).is_some(),
                "band {letter} failed"
            );
        }
    }

    #[test]
    fn seven_digit_easting_parses() {
        let point = parse_utm_coordinate("33N 3915450 5819698", false).expect("valid UTM");
        assert!(point.lat().is_finite());
        assert!(point.lon().is_finite());
    }

    #[test]
    fn single_axis_extraction() {
        let text = "33N 391545 5819698";
        let both = parse_utm_coordinate(text, true).expect("valid UTM");

        let lat = parse_utm_coordinate_single(text, CoordinateKind::Latitude, true)
            .expect("latitude");
        let lon = parse_utm_coordinate_single(text, CoordinateKind::Longitude, true)
            .expect("longitude");

        assert_eq!(lat.to_f64().unwrap_or(f64::NAN), both.lat());
        assert_eq!(lon.to_f64().unwrap_or(f64::NAN), both.lon());

        // Anything that is not longitude selects the latitude.
        let unclassified =
            parse_utm_coordinate_single(text, CoordinateKind::Unclassified, true)
                .expect("latitude");
        assert_eq!(unclassified, lat);

        assert_eq!(
            parse_utm_coordinate_single("invalid utm", CoordinateKind::Latitude, true),
            None
        );
    }
}
