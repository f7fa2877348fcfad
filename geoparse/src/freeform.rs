//! Parsing free-form coordinate text into decimal degrees.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use rust_decimal::Decimal;

use crate::degrees::to_decimal_degrees;
use crate::error::GeoparseError;
use crate::hemisphere::Hemisphere;
use crate::kind::CoordinateKind;

/// Component layout of a maritime pattern's captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MaritimeLayout {
    DegreesMinutes,
    DegreesMinutesSeconds,
}

/// A maritime grammar rule: the anchored pattern and its capture layout.
struct MaritimeRule {
    pattern: Regex,
    layout: MaritimeLayout,
}

lazy_static! {
    /// Maritime shorthand rules, tried in priority order before the general
    /// tokenizer runs. The dash and degree-mark layouts come first because
    /// the delimiter-agnostic scan below would also accept them, with
    /// weaker validation.
    static ref MARITIME_RULES: [MaritimeRule; 4] = [
        // degree-dash-minutes with degree mark: 40°–41.65'N
        MaritimeRule {
            pattern: Regex::new(r#"^(\d+\.?\d*)°[–-](\d+\.?\d*)['"”]?([A-Za-z])$"#)
                .expect("invalid maritime pattern"),
            layout: MaritimeLayout::DegreesMinutes,
        },
        // degree-dash-minutes without degree mark: 54-05.48N
        MaritimeRule {
            pattern: Regex::new(r"^(\d+\.?\d*)[–-](\d+\.?\d*)([A-Za-z])$")
                .expect("invalid maritime pattern"),
            layout: MaritimeLayout::DegreesMinutes,
        },
        // degree-minutes with degree mark: 30°34.4'N
        MaritimeRule {
            pattern: Regex::new(r#"^(\d+\.?\d*)°(\d+\.?\d*)['"”]?([A-Za-z])$"#)
                .expect("invalid maritime pattern"),
            layout: MaritimeLayout::DegreesMinutes,
        },
        // degree-minutes-seconds: 30°34'24.0"N
        MaritimeRule {
            pattern: Regex::new(r#"^(\d+\.?\d*)°(\d+\.?\d*)['"”](\d+\.?\d*)['"”]([A-Za-z])$"#)
                .expect("invalid maritime pattern"),
            layout: MaritimeLayout::DegreesMinutesSeconds,
        },
    ];

    /// Scanner for numeric tokens: digits with an optional `.` or `,`
    /// fraction. Everything between tokens is treated as a delimiter.
    static ref NUMERIC_TOKEN: Regex =
        Regex::new(r"\d+(?:[.,]\d+)?").expect("invalid numeric token pattern");
}

/// Input accepted by [`parse_coordinate`]: coordinate text, an already
/// numeric value, or nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateInput<'a> {
    /// Coordinate text in any supported format.
    Text(&'a str),
    /// A value already expressed in decimal degrees.
    Number(f64),
    /// An exact decimal value in decimal degrees.
    Decimal(Decimal),
    /// No input.
    None,
}

impl<'a> From<&'a str> for CoordinateInput<'a> {
    fn from(value: &'a str) -> Self {
        CoordinateInput::Text(value)
    }
}

impl From<f64> for CoordinateInput<'_> {
    fn from(value: f64) -> Self {
        CoordinateInput::Number(value)
    }
}

impl From<i32> for CoordinateInput<'_> {
    fn from(value: i32) -> Self {
        CoordinateInput::Number(f64::from(value))
    }
}

impl From<Decimal> for CoordinateInput<'_> {
    fn from(value: Decimal) -> Self {
        CoordinateInput::Decimal(value)
    }
}

impl<'a, T: Into<CoordinateInput<'a>>> From<Option<T>> for CoordinateInput<'a> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => CoordinateInput::None,
        }
    }
}

/// Parses a latitude or longitude from free-form input.
///
/// Returns the value in decimal degrees; negative values lie in the southern
/// or western hemisphere. Absent or blank input yields `Ok(None)`. Numeric
/// input skips text parsing and goes straight to range validation.
///
/// Supported text formats, by example:
///
/// * decimal degrees: `23.43`, `-45.21`, `23.43 N`, `W 45.21`
/// * degrees and decimal minutes: `23° 25.800'`, `-45 12.600`
/// * degrees, minutes and seconds: `23° 25' 48.0" N`, `S 45 12 36.0`
/// * maritime shorthand: `40°–41.65'N`, `54-05.48N`, `30°34.4'N`,
///   `30°34'24.0"N`
///
/// Comma decimal separators, `d`/`deg` degree markers, dash separators,
/// spelled-out cardinal directions and Cyrillic hemisphere letters
/// (с, ю, в, з) are all accepted.
///
/// ```
/// use geoparse::{parse_coordinate, CoordinateKind};
/// use rust_decimal::Decimal;
///
/// let value = parse_coordinate("23.43 N", CoordinateKind::Latitude, true).unwrap();
/// assert_eq!(value, Some(Decimal::new(2343, 2)));
/// ```
pub fn parse_coordinate<'a>(
    input: impl Into<CoordinateInput<'a>>,
    kind: CoordinateKind,
    validate: bool,
) -> Result<Option<Decimal>, GeoparseError> {
    let text = match input.into() {
        CoordinateInput::None => return Ok(None),
        CoordinateInput::Number(value) => {
            let decimal = float_to_decimal(value, &value.to_string())?;
            return finish(decimal, kind, validate);
        }
        CoordinateInput::Decimal(value) => return finish(value, kind, validate),
        CoordinateInput::Text(text) => text,
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Some(value) = parse_maritime(trimmed)? {
        return finish(value, kind, validate);
    }

    let value = parse_general(text, trimmed)?;
    finish(value, kind, validate)
}

fn finish(
    value: Decimal,
    kind: CoordinateKind,
    validate: bool,
) -> Result<Option<Decimal>, GeoparseError> {
    let value = if validate { kind.validate(value)? } else { value };
    Ok(Some(value))
}

/// Converts an internal floating-point result to the decimal boundary type.
///
/// Goes through the shortest round-trip representation so exact decimal
/// inputs come back without binary artifacts. Non-finite and oversized
/// values are not valid coordinates.
fn float_to_decimal(value: f64, original: &str) -> Result<Decimal, GeoparseError> {
    if !value.is_finite() {
        return Err(GeoparseError::InvalidCoordinate(original.to_string()));
    }

    Decimal::from_str(&value.to_string())
        .map_err(|_| GeoparseError::InvalidCoordinate(original.to_string()))
}

/// Tries the maritime rules in declaration order; the first full match
/// commits. `Ok(None)` means no rule matched and the general tokenizer
/// should run instead.
fn parse_maritime(trimmed: &str) -> Result<Option<Decimal>, GeoparseError> {
    for rule in MARITIME_RULES.iter() {
        let Some(captures) = rule.pattern.captures(trimmed) else {
            continue;
        };
        log::trace!("maritime rule {:?} matched {trimmed:?}", rule.layout);

        let degrees = capture_value(&captures, 1, trimmed)?;
        let minutes = capture_value(&captures, 2, trimmed)?;
        let (seconds, hemisphere_group) = match rule.layout {
            MaritimeLayout::DegreesMinutes => (None, 3),
            MaritimeLayout::DegreesMinutesSeconds => {
                (Some(capture_value(&captures, 3, trimmed)?), 4)
            }
        };

        let letter = captures[hemisphere_group].chars().next().unwrap_or_default();
        let hemisphere =
            Hemisphere::from_letter(letter).ok_or(GeoparseError::InvalidHemisphere(letter))?;

        // A fractional degree field already encodes the sub-degree part.
        if degrees.fract() != 0.0 {
            return Err(GeoparseError::FractionalDegrees(match rule.layout {
                MaritimeLayout::DegreesMinutes => "minutes",
                MaritimeLayout::DegreesMinutesSeconds => "minutes and seconds",
            }));
        }

        if minutes >= 60.0 {
            return Err(GeoparseError::ComponentOutOfRange {
                component: "minutes",
                value: minutes,
            });
        }
        if let Some(seconds) = seconds {
            if seconds >= 60.0 {
                return Err(GeoparseError::ComponentOutOfRange {
                    component: "seconds",
                    value: seconds,
                });
            }
        }

        let mut components = vec![degrees, minutes];
        if let Some(seconds) = seconds {
            components.push(seconds);
        }

        let magnitude = to_decimal_degrees(&components)?;
        return float_to_decimal(hemisphere.sign() * magnitude, trimmed).map(Some);
    }

    Ok(None)
}

fn capture_value(
    captures: &Captures<'_>,
    group: usize,
    original: &str,
) -> Result<f64, GeoparseError> {
    captures[group]
        .parse::<f64>()
        .map_err(|_| GeoparseError::InvalidCoordinate(original.to_string()))
}

/// The general tokenizer: a delimiter-agnostic scan for up to three numeric
/// fields, with hemisphere designators allowed on either end.
fn parse_general(original: &str, trimmed: &str) -> Result<Decimal, GeoparseError> {
    let mut normalized = trimmed.to_lowercase();

    // Spelled-out cardinal directions and their Cyrillic single-letter
    // equivalents collapse to the Latin designators.
    for (from, to) in [
        ("north", "n"),
        ("south", "s"),
        ("east", "e"),
        ("west", "w"),
        ("с", "n"),
        ("ю", "s"),
        ("в", "e"),
        ("з", "w"),
    ] {
        if normalized.contains(from) {
            normalized = normalized.replace(from, to);
        }
    }

    // A leading sign or hemisphere letter wins over a trailing letter.
    let negative =
        normalized.starts_with(['-', 'w', 's']) || normalized.ends_with(['w', 's']);
    let sign = if negative { -1.0 } else { 1.0 };

    let tokens: Vec<&str> = NUMERIC_TOKEN
        .find_iter(&normalized)
        .map(|token| token.as_str())
        .collect();
    if tokens.is_empty() {
        return Err(GeoparseError::InvalidCoordinate(original.to_string()));
    }

    let mut fields = Vec::with_capacity(tokens.len());
    for token in &tokens {
        let value = token
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| GeoparseError::InvalidCoordinate(original.to_string()))?;
        fields.push(value);
    }

    if fields.len() >= 2 && fields[1] >= 60.0 {
        return Err(GeoparseError::ComponentOutOfRange {
            component: "minutes",
            value: fields[1],
        });
    }
    if fields.len() >= 3 && fields[2] >= 60.0 {
        return Err(GeoparseError::ComponentOutOfRange {
            component: "seconds",
            value: fields[2],
        });
    }
    if fields.len() > 3 {
        return Err(GeoparseError::InvalidCoordinate(original.to_string()));
    }

    // A degrees-minutes pair may carry one fractional field, not two.
    // Degrees-minutes-seconds triples are exempt: a fractional seconds
    // field routinely rides along with exact degrees and minutes.
    if fields.len() == 2 {
        let fractional = tokens
            .iter()
            .filter(|token| token.contains(['.', ',']))
            .count();
        if fractional > 1 {
            return Err(GeoparseError::MultipleDecimalFields);
        }
    }

    let magnitude = to_decimal_degrees(&fields)?;
    float_to_decimal(sign * magnitude, original)
}
