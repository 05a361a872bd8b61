//! Individual observation line parsing for HURDAT2 files
//!
//! Turns one observation line into a typed [`TrackPoint`] owned by the storm
//! announced in the most recent header.

use super::field_parsers::{
    LineContext, get_required_field, parse_position, parse_timestamp, parse_wind, split_fields,
};
use super::header::StormHeader;
use crate::Result;
use crate::app::models::{RecordIdentifier, StormStatus, TrackPoint};
use crate::constants::observation_fields;

/// Parse a single observation line
///
/// Fields beyond maximum wind (pressure, wind radii) are ignored.
pub fn parse_observation_record(ctx: &LineContext<'_>, header: &StormHeader) -> Result<TrackPoint> {
    let fields = split_fields(ctx.text);
    if fields.len() < observation_fields::MIN_FIELDS {
        return Err(ctx.error(format!(
            "observation has {} fields, expected at least {}",
            fields.len(),
            observation_fields::MIN_FIELDS
        )));
    }

    let date = get_required_field(ctx, &fields, observation_fields::DATE, "date")?;
    let time = get_required_field(ctx, &fields, observation_fields::TIME, "time")?;
    let timestamp = parse_timestamp(ctx, date, time)?;

    let Ok(record_identifier) = fields[observation_fields::RECORD_IDENTIFIER]
        .parse::<RecordIdentifier>();
    let Ok(status) = fields[observation_fields::STATUS].parse::<StormStatus>();

    let (latitude, longitude) = parse_position(
        ctx,
        fields[observation_fields::LATITUDE],
        fields[observation_fields::LONGITUDE],
    )?;

    let max_wind_kt = parse_wind(ctx, fields[observation_fields::MAX_WIND])?;

    Ok(TrackPoint {
        storm_id: header.storm_id.clone(),
        storm_name: header.name.clone(),
        timestamp,
        record_identifier,
        status,
        latitude,
        longitude,
        max_wind_kt,
    })
}
