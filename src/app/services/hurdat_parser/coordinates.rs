//! Hemisphere-suffixed coordinate decoding
//!
//! HURDAT2 writes positions as an unsigned magnitude followed by a single
//! hemisphere letter (`28.0N`, `94.8W`). South and west decode to negative degrees.

use crate::{Error, Result};

/// Hemisphere named by a coordinate suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// Sign applied to the magnitude
    pub fn sign(&self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }

    pub fn is_latitude(&self) -> bool {
        matches!(self, Hemisphere::North | Hemisphere::South)
    }
}

/// Split a token into its hemisphere and unsigned magnitude
fn decode(token: &str) -> Result<(Hemisphere, f64)> {
    let token = token.trim();

    let Some(suffix) = token.chars().last() else {
        return Err(Error::invalid_coordinate(token, "empty token"));
    };

    let hemisphere = Hemisphere::from_suffix(suffix).ok_or_else(|| {
        Error::invalid_coordinate(token, "expected a trailing N, S, E or W")
    })?;

    let magnitude = &token[..token.len() - suffix.len_utf8()];
    if magnitude.is_empty() {
        return Err(Error::invalid_coordinate(token, "missing numeric degrees"));
    }

    // Digits and at most one decimal point; no sign, exponent or inf/nan
    let is_decimal = magnitude.chars().all(|c| c.is_ascii_digit() || c == '.')
        && magnitude.matches('.').count() <= 1
        && magnitude.chars().any(|c| c.is_ascii_digit());
    if !is_decimal {
        return Err(Error::invalid_coordinate(
            token,
            format!("'{}' is not a non-negative decimal number", magnitude),
        ));
    }

    let degrees = magnitude
        .parse::<f64>()
        .map_err(|e| Error::invalid_coordinate(token, e.to_string()))?;

    Ok((hemisphere, degrees))
}

/// Decode a coordinate token into signed decimal degrees
///
/// `"28.0N"` and `"28.0E"` decode to `28.0`; `"28.0S"` and `"28.0W"` to `-28.0`.
pub fn parse_coordinate(token: &str) -> Result<f64> {
    let (hemisphere, degrees) = decode(token)?;
    Ok(hemisphere.sign() * degrees)
}

/// Decode a latitude token, requiring an N/S suffix and a value within 90 degrees
pub fn parse_latitude(token: &str) -> Result<f64> {
    let (hemisphere, degrees) = decode(token)?;
    if !hemisphere.is_latitude() {
        return Err(Error::invalid_coordinate(
            token.trim(),
            "latitude must end in N or S",
        ));
    }
    if degrees > 90.0 {
        return Err(Error::invalid_coordinate(
            token.trim(),
            "latitude exceeds 90 degrees",
        ));
    }
    Ok(hemisphere.sign() * degrees)
}

/// Decode a longitude token, requiring an E/W suffix and a value within 180 degrees
pub fn parse_longitude(token: &str) -> Result<f64> {
    let (hemisphere, degrees) = decode(token)?;
    if hemisphere.is_latitude() {
        return Err(Error::invalid_coordinate(
            token.trim(),
            "longitude must end in E or W",
        ));
    }
    if degrees > 180.0 {
        return Err(Error::invalid_coordinate(
            token.trim(),
            "longitude exceeds 180 degrees",
        ));
    }
    Ok(hemisphere.sign() * degrees)
}
