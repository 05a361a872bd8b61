//! Field parsing utilities for HURDAT2 lines
//!
//! This module provides helper functions for pulling typed values out of
//! comma-separated HURDAT2 fields, attaching the offending line to every error.

use chrono::{DateTime, NaiveDate, Utc};

use super::coordinates::{parse_latitude, parse_longitude};
use crate::constants::observation_fields;
use crate::{Error, Result};

/// A source line together with its 1-based line number
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> LineContext<'a> {
    pub fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }

    /// Build a format error pointing at this line
    pub fn error(&self, message: impl Into<String>) -> Error {
        Error::format(self.number, self.text.trim_end(), message)
    }
}

/// Split a line on commas, trimming each field
///
/// HURDAT2 lines end with a trailing comma, so a final empty field is dropped.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Get a field by position or fail naming the missing column
pub fn get_required_field<'a>(
    ctx: &LineContext<'_>,
    fields: &[&'a str],
    index: usize,
    field_name: &str,
) -> Result<&'a str> {
    fields
        .get(index)
        .copied()
        .ok_or_else(|| ctx.error(format!("missing {} field", field_name)))
}

fn parse_digits(ctx: &LineContext<'_>, value: &str, field_name: &str) -> Result<u32> {
    value.parse::<u32>().map_err(|_| {
        ctx.error(format!(
            "invalid {} '{}': expected digits",
            field_name, value
        ))
    })
}

/// Combine an 8-digit `YYYYMMDD` date and a 4-digit `HHMM` time into a UTC timestamp
pub fn parse_timestamp(ctx: &LineContext<'_>, date: &str, time: &str) -> Result<DateTime<Utc>> {
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ctx.error(format!("invalid date '{}': expected YYYYMMDD", date)));
    }
    if time.len() != 4 || !time.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ctx.error(format!("invalid time '{}': expected HHMM", time)));
    }

    let year = parse_digits(ctx, &date[0..4], "year")? as i32;
    let month = parse_digits(ctx, &date[4..6], "month")?;
    let day = parse_digits(ctx, &date[6..8], "day")?;
    let hour = parse_digits(ctx, &time[0..2], "hour")?;
    let minute = parse_digits(ctx, &time[2..4], "minute")?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ctx.error(format!("date '{}' does not exist", date)))?
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| ctx.error(format!("time '{}' is out of range", time)))?;

    Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

/// Decode the latitude and longitude tokens of an observation
pub fn parse_position(ctx: &LineContext<'_>, lat: &str, lon: &str) -> Result<(f64, f64)> {
    let latitude = parse_latitude(lat).map_err(|e| ctx.error(e.to_string()))?;
    let longitude = parse_longitude(lon).map_err(|e| ctx.error(e.to_string()))?;
    Ok((latitude, longitude))
}

/// Parse maximum sustained wind in knots; the `-99` sentinel yields `None`
pub fn parse_wind(ctx: &LineContext<'_>, value: &str) -> Result<Option<u16>> {
    let knots = value.parse::<i32>().map_err(|_| {
        ctx.error(format!("invalid maximum wind '{}': expected integer knots", value))
    })?;

    if knots == observation_fields::MISSING_WIND {
        return Ok(None);
    }

    u16::try_from(knots).map(Some).map_err(|_| {
        ctx.error(format!(
            "maximum wind {} is outside the valid range of knots",
            knots
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const LINE: &str = "20040916, 0650, L, HU, 30.2N,  87.9W, 105,";

    #[test]
    fn test_split_fields_drops_trailing_empty() {
        let fields = split_fields(LINE);
        assert_eq!(
            fields,
            vec!["20040916", "0650", "L", "HU", "30.2N", "87.9W", "105"]
        );
    }

    #[test]
    fn test_split_fields_keeps_blank_identifier() {
        let fields = split_fields("18510625, 0000,  , HU, 28.0N,  94.8W,  80");
        assert_eq!(fields[2], "");
        assert_eq!(fields.len(), 7);
    }

    #[test]
    fn test_parse_timestamp() {
        let ctx = LineContext::new(1, LINE);
        let ts = parse_timestamp(&ctx, "20040916", "0650").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2004, 9, 16, 6, 50, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_rejects_bad_values() {
        let ctx = LineContext::new(7, LINE);

        for (date, time) in [
            ("2004091", "0650"),
            ("20040916", "650"),
            ("2004O916", "0650"),
            ("20040231", "0000"),
            ("20040916", "2400"),
            ("20040916", "0660"),
        ] {
            let err = parse_timestamp(&ctx, date, time).unwrap_err();
            assert!(err.is_format_error(), "{} {} should fail", date, time);
            assert!(err.to_string().contains("line 7"));
        }
    }

    #[test]
    fn test_parse_wind() {
        let ctx = LineContext::new(1, LINE);
        assert_eq!(parse_wind(&ctx, "105").unwrap(), Some(105));
        assert_eq!(parse_wind(&ctx, "0").unwrap(), Some(0));
        assert_eq!(parse_wind(&ctx, "-99").unwrap(), None);
        assert!(parse_wind(&ctx, "-5").is_err());
        assert!(parse_wind(&ctx, "fast").is_err());
    }

    #[test]
    fn test_parse_position_wraps_coordinate_errors() {
        let ctx = LineContext::new(12, LINE);
        assert_eq!(parse_position(&ctx, "30.2N", "87.9W").unwrap(), (30.2, -87.9));

        let err = parse_position(&ctx, "abcN", "87.9W").unwrap_err();
        match err {
            Error::Format { line_number, .. } => assert_eq!(line_number, 12),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_required_field() {
        let ctx = LineContext::new(3, "20040916, 0650");
        let fields = split_fields(ctx.text);
        assert_eq!(get_required_field(&ctx, &fields, 1, "time").unwrap(), "0650");

        let err = get_required_field(&ctx, &fields, 4, "latitude").unwrap_err();
        assert!(err.to_string().contains("missing latitude field"));
    }
}
