//! Event deduplication and report row assembly

use std::collections::HashSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::models::{LandfallEvent, ReportRow};

/// Which key makes two landfall events duplicates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DedupPolicy {
    /// One row per storm name; reused names such as "UNNAMED" collapse to
    /// their first storm
    #[default]
    StormName,
    /// One row per storm identifier
    StormId,
}

impl DedupPolicy {
    fn key<'a>(&self, event: &'a LandfallEvent) -> &'a str {
        match self {
            Self::StormName => &event.storm_name,
            Self::StormId => event.storm_id.as_str(),
        }
    }
}

/// Convert events into report rows, keeping the first event for each key
///
/// Rows keep the order of the incoming events.
pub fn assemble(events: &[LandfallEvent], policy: DedupPolicy) -> Vec<ReportRow> {
    let mut seen = HashSet::new();
    let mut rows = Vec::with_capacity(events.len());

    for event in events {
        if seen.insert(policy.key(event)) {
            rows.push(ReportRow::from(event));
        } else {
            debug!(
                "Dropping duplicate landfall for {} ({}) under {:?}",
                event.storm_name, event.storm_id, policy
            );
        }
    }

    rows
}
