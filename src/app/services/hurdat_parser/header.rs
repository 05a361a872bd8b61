//! HURDAT2 storm header line parsing
//!
//! A header line opens each storm block: `AL092004,            IVAN,     94,`.

use super::field_parsers::{LineContext, get_required_field, split_fields};
use crate::Result;
use crate::app::models::{Basin, StormId};
use crate::constants::header_fields;

/// Identity of the storm whose observations follow
#[derive(Debug, Clone, PartialEq)]
pub struct StormHeader {
    pub storm_id: StormId,
    pub name: String,
    pub basin: Basin,

    /// Number of observation lines the header announces
    pub expected_entries: Option<usize>,
}

impl StormHeader {
    /// A header line starts with a recognised two-letter basin code
    pub fn is_header_line(line: &str) -> bool {
        Basin::from_line_prefix(line).is_some()
    }

    /// Parse a header line; identifier and name are trimmed
    pub fn parse(ctx: &LineContext<'_>) -> Result<Self> {
        let basin = Basin::from_line_prefix(ctx.text)
            .ok_or_else(|| ctx.error("header does not start with a known basin code"))?;

        let fields = split_fields(ctx.text);
        if fields.len() < header_fields::MIN_FIELDS {
            return Err(ctx.error(format!(
                "header has {} fields, expected at least {}",
                fields.len(),
                header_fields::MIN_FIELDS
            )));
        }

        let storm_id = get_required_field(ctx, &fields, header_fields::STORM_ID, "storm id")?;
        let name = get_required_field(ctx, &fields, header_fields::NAME, "storm name")?;

        let expected_entries = fields
            .get(header_fields::ENTRY_COUNT)
            .and_then(|count| count.parse::<usize>().ok());

        Ok(Self {
            storm_id: StormId::new(storm_id),
            name: name.to_string(),
            basin,
            expected_entries,
        })
    }
}
