//! Time-of-day heuristic availability model.
//!
//! Peak hour + high-density keyword => likely full, peak hour alone => limited,
//! anything else => likely available. This never reflects live occupancy.

use crate::estimation::model::{AvailabilityEstimator, AvailabilityLevel, AvailabilityResult};
use crate::places::CandidatePlace;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const MODEL_NAME: &str = "heuristic";

/// Half-open hour window `[start_hour, end_hour)` in 24h local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakWindow {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl PeakWindow {
    pub const fn new(start_hour: u8, end_hour: u8) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    pub fn contains(&self, hour: u8) -> bool {
        self.start_hour <= hour && hour < self.end_hour
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityConfig {
    pub peak_hours: Vec<PeakWindow>,
    pub high_density_keywords: Vec<String>,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            peak_hours: vec![
                PeakWindow::new(8, 11),  // morning
                PeakWindow::new(17, 21), // evening
            ],
            high_density_keywords: [
                "mall",
                "market",
                "central business district",
                "cbd",
                "commercial",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeuristicEstimator {
    config: AvailabilityConfig,
    // Lower-cased. An empty keyword matches every place.
    keywords: Vec<String>,
}

impl HeuristicEstimator {
    pub fn new(config: AvailabilityConfig) -> Self {
        let keywords = config
            .high_density_keywords
            .iter()
            .map(|kw| kw.to_lowercase())
            .collect();
        Self { config, keywords }
    }

    pub fn with_defaults() -> Self {
        Self::new(AvailabilityConfig::default())
    }

    pub fn config(&self) -> &AvailabilityConfig {
        &self.config
    }

    pub fn is_peak(&self, hour: u8) -> bool {
        self.config.peak_hours.iter().any(|window| window.contains(hour))
    }

    pub fn is_high_density(&self, place: &CandidatePlace) -> bool {
        let text = format!("{} {}", place.name, place.address_hints).to_lowercase();
        self.keywords.iter().any(|kw| text.contains(kw.as_str()))
    }
}

impl Default for HeuristicEstimator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl AvailabilityEstimator for HeuristicEstimator {
    fn estimate(&self, place: &CandidatePlace, now: OffsetDateTime) -> AvailabilityResult {
        let is_peak = self.is_peak(now.hour());
        let is_high_density = self.is_high_density(place);

        if is_peak && is_high_density {
            likely_full()
        } else if is_peak {
            limited()
        } else {
            likely_available()
        }
    }

    fn model_name(&self) -> &'static str {
        MODEL_NAME
    }
}

fn likely_full() -> AvailabilityResult {
    AvailabilityResult {
        level: AvailabilityLevel::LikelyFull,
        label: "Likely Full (estimate)".to_string(),
        color_token: "#e53935".to_string(),
        reason: "High-density commercial area during peak hours (estimated, not real-time)."
            .to_string(),
    }
}

fn limited() -> AvailabilityResult {
    AvailabilityResult {
        level: AvailabilityLevel::Limited,
        label: "Limited Availability (estimate)".to_string(),
        color_token: "#fdd835".to_string(),
        reason: "Peak hours - parking may be limited (estimated, not real-time).".to_string(),
    }
}

fn likely_available() -> AvailabilityResult {
    AvailabilityResult {
        level: AvailabilityLevel::LikelyAvailable,
        label: "Likely Available (estimate)".to_string(),
        color_token: "#43a047".to_string(),
        reason: "Off-peak hours - higher likelihood of availability (estimated, not real-time)."
            .to_string(),
    }
}
