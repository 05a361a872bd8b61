//! The assembled landfall report

use serde::Serialize;

use super::assembler::{DedupPolicy, assemble};
use crate::app::models::{LandfallEvent, ReportRow};

/// Ordered report rows together with how they were produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandfallReport {
    pub region: String,
    pub dedup_policy: DedupPolicy,
    pub rows: Vec<ReportRow>,
    /// Events dropped as duplicates under the policy
    pub duplicates_removed: usize,
}

impl LandfallReport {
    pub fn from_events(
        region: impl Into<String>,
        events: &[LandfallEvent],
        dedup_policy: DedupPolicy,
    ) -> Self {
        let rows = assemble(events, dedup_policy);
        let duplicates_removed = events.len() - rows.len();

        Self {
            region: region.into(),
            dedup_policy,
            rows,
            duplicates_removed,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row with the strongest wind at landfall (first one on ties)
    pub fn strongest(&self) -> Option<&ReportRow> {
        self.rows
            .iter()
            .rev()
            .filter(|row| row.max_wind_kt.is_some())
            .max_by_key(|row| row.max_wind_kt)
    }
}
