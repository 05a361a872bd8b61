//! Landfall detection over parsed storm tracks
//!
//! Landfall is inferred from position and intensity alone: a storm's landfall
//! is the first observation at hurricane status whose position lies inside the
//! target region. The dataset's own landfall record identifier is not used.
//!
//! - [`detector`] - Track scanning and event selection
//! - [`criteria`] - The per-point qualification rule
//! - [`stats`] - Detection counters and result structures

pub mod criteria;
pub mod detector;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use criteria::DetectionCriteria;
pub use detector::{LandfallDetector, detect};
pub use stats::{DetectionResult, DetectionStats};
