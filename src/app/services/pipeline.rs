//! Parse, detect and assemble in one call

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::Result;
use crate::app::services::hurdat_parser::{HurdatParser, ParseMode, ParseStats};
use crate::app::services::landfall_detector::{DetectionCriteria, DetectionStats, LandfallDetector};
use crate::app::services::region::RegionBoundary;
use crate::app::services::report::{DedupPolicy, LandfallReport};

/// Knobs for a full landfall run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    pub parse_mode: ParseMode,
    pub criteria: DetectionCriteria,
    pub dedup: DedupPolicy,
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub report: LandfallReport,
    pub parse_stats: ParseStats,
    pub detection_stats: DetectionStats,
    pub storm_count: usize,
}

/// Runs the parser, the landfall detector and the report assembler in turn
#[derive(Debug, Clone, Default)]
pub struct LandfallPipeline {
    options: PipelineOptions,
}

impl LandfallPipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Produce the landfall report for raw HURDAT2 text and a region
    ///
    /// # Errors
    ///
    /// Returns a format error if the text fails to parse in strict mode.
    pub fn run<R>(&self, raw_text: &str, region: &R) -> Result<PipelineOutput>
    where
        R: RegionBoundary + ?Sized,
    {
        let parsed = HurdatParser::with_mode(self.options.parse_mode).parse(raw_text)?;
        info!("{}", parsed.stats.summary());

        let detector = LandfallDetector::with_criteria(self.options.criteria.clone());
        let detection = detector.detect_with_stats(&parsed.tracks, region);

        let report = LandfallReport::from_events(region.name(), &detection.events, self.options.dedup);
        info!(
            "Report for '{}': {} row(s), {} duplicate(s) removed",
            report.region,
            report.len(),
            report.duplicates_removed
        );

        Ok(PipelineOutput {
            storm_count: parsed.storm_count(),
            report,
            parse_stats: parsed.stats,
            detection_stats: detection.stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::region::BoundingBox;
    use chrono::{TimeZone, Utc};

    fn region() -> BoundingBox {
        BoundingBox::new("Florida", 24.0, 31.0, -88.0, -80.0).unwrap()
    }

    const ALPHA_BETA: &str = "\
AL011990,              ALPHA,      2,
19900801, 0000,  , HU, 20.0N,  60.0W, 100,
19900801, 0600,  , HU, 21.0N,  61.0W, 105,
AL021990,               BETA,      3,
19900910, 0000,  , TS, 24.0N,  78.0W,  60,
19900910, 1200,  , HU, 26.5N,  81.0W,  95,
19900911, 0000,  , HU, 28.0N,  82.0W,  80,
";

    #[test]
    fn test_end_to_end_single_landfall() {
        let output = LandfallPipeline::default().run(ALPHA_BETA, &region()).unwrap();

        assert_eq!(output.storm_count, 2);
        assert_eq!(output.report.rows.len(), 1);

        let row = &output.report.rows[0];
        assert_eq!(row.name, "BETA");
        assert_eq!(
            row.timestamp,
            Utc.with_ymd_and_hms(1990, 9, 10, 12, 0, 0).unwrap()
        );
        assert_eq!(row.max_wind_kt, Some(95));

        assert_eq!(output.parse_stats.observations, 5);
        assert_eq!(output.detection_stats.storms_with_landfall, 1);
    }

    #[test]
    fn test_strict_parse_failure_propagates() {
        let text = "AL011990, ALPHA, 1,\n19900801, 0000,  , HU, 20.0Q, 60.0W, 100,\n";
        let err = LandfallPipeline::default().run(text, &region()).unwrap_err();

        assert!(err.is_format_error());
    }

    #[test]
    fn test_lenient_pipeline_skips_bad_lines() {
        let text = format!("{}19900911, 0600,  , HU, bad,  82.0W,  80,\n", ALPHA_BETA);
        let options = PipelineOptions {
            parse_mode: ParseMode::Lenient,
            ..Default::default()
        };

        let output = LandfallPipeline::new(options).run(&text, &region()).unwrap();

        assert_eq!(output.report.rows.len(), 1);
        assert_eq!(output.parse_stats.lines_skipped, 1);
    }
}
