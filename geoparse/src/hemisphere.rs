//! Hemisphere designators attached to coordinate text.

use serde::{Deserialize, Serialize};

use crate::kind::CoordinateKind;

/// One of the four hemisphere designators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Hemisphere {
    /// Northern hemisphere, positive latitude.
    North,
    /// Southern hemisphere, negative latitude.
    South,
    /// Eastern hemisphere, positive longitude.
    East,
    /// Western hemisphere, negative longitude.
    West,
}

impl Hemisphere {
    /// Looks up a hemisphere by its single-letter designator,
    /// case-insensitively.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// Sign multiplier for coordinate magnitudes: +1 for north/east, −1 for
    /// south/west.
    pub fn sign(&self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }

    /// The coordinate axis this hemisphere belongs to.
    ///
    /// Parsing does not require the axis to agree with the requested
    /// coordinate kind; the range check is the only cross-check applied.
    pub fn axis(&self) -> CoordinateKind {
        match self {
            Hemisphere::North | Hemisphere::South => CoordinateKind::Latitude,
            Hemisphere::East | Hemisphere::West => CoordinateKind::Longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_lookup_ignores_case() {
        assert_eq!(Hemisphere::from_letter('n'), Some(Hemisphere::North));
        assert_eq!(Hemisphere::from_letter('N'), Some(Hemisphere::North));
        assert_eq!(Hemisphere::from_letter('w'), Some(Hemisphere::West));
        assert_eq!(Hemisphere::from_letter('X'), None);
    }

    #[test]
    fn sign_and_axis() {
        assert_eq!(Hemisphere::North.sign(), 1.0);
        assert_eq!(Hemisphere::South.sign(), -1.0);
        assert_eq!(Hemisphere::East.sign(), 1.0);
        assert_eq!(Hemisphere::West.sign(), -1.0);

        assert_eq!(Hemisphere::South.axis(), CoordinateKind::Latitude);
        assert_eq!(Hemisphere::East.axis(), CoordinateKind::Longitude);
    }
}
