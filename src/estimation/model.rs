//! Availability estimator trait for swappable parking availability models.
//!
//! The built-in model is a time-of-day heuristic. Models are selected via the
//! `model` field of the availability file and loaded at startup, so a model
//! backed by measured occupancy can replace it without touching the analyzer.

use crate::places::CandidatePlace;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Estimated availability, ordered best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityLevel {
    LikelyAvailable,
    Limited,
    LikelyFull,
}

impl AvailabilityLevel {
    /// Ranking ordinal: lower ranks first.
    pub fn ordinal(self) -> u8 {
        match self {
            AvailabilityLevel::LikelyAvailable => 0,
            AvailabilityLevel::Limited => 1,
            AvailabilityLevel::LikelyFull => 2,
        }
    }
}

/// Output of an availability model. Every label and reason carries the
/// estimate caveat because no model here measures live occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub level: AvailabilityLevel,
    pub label: String,
    pub color_token: String,
    pub reason: String,
}

/// Trait for models that estimate how likely a place is to have free spots.
pub trait AvailabilityEstimator: Send + Sync + std::fmt::Debug {
    /// Estimate availability for `place` at local wall-clock time `now`.
    fn estimate(&self, place: &CandidatePlace, now: OffsetDateTime) -> AvailabilityResult;

    /// Name used in the availability file's `model` field.
    fn model_name(&self) -> &'static str;
}
