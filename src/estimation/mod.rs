use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub mod heuristic;
pub mod model;

use heuristic::{AvailabilityConfig, HeuristicEstimator, PeakWindow};
use model::AvailabilityEstimator;

// Model Factory
pub fn create_estimator(
    file: &AvailabilityFile,
) -> Result<Box<dyn AvailabilityEstimator>, AvailabilityConfigError> {
    match file.model.as_str() {
        heuristic::MODEL_NAME => {
            let config = file.heuristic_config()?;
            Ok(Box::new(HeuristicEstimator::new(config)))
        }
        other => Err(AvailabilityConfigError::Invalid(format!(
            "unknown model: {other}"
        ))),
    }
}

/// On-disk availability settings. Missing fields fall back to the defaults.
#[derive(Debug, Deserialize)]
pub struct AvailabilityFile {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub peak_hours: Option<Vec<PeakWindow>>,
    #[serde(default)]
    pub high_density_keywords: Option<Vec<String>>,
}

fn default_model() -> String {
    heuristic::MODEL_NAME.to_string()
}

impl AvailabilityFile {
    fn heuristic_config(&self) -> Result<AvailabilityConfig, AvailabilityConfigError> {
        let defaults = AvailabilityConfig::default();
        let peak_hours = self.peak_hours.clone().unwrap_or(defaults.peak_hours);
        for window in &peak_hours {
            if window.start_hour >= window.end_hour || window.end_hour > 24 {
                return Err(AvailabilityConfigError::Invalid(format!(
                    "peak window [{}, {}) must satisfy start < end <= 24",
                    window.start_hour, window.end_hour
                )));
            }
        }
        let high_density_keywords = self
            .high_density_keywords
            .clone()
            .unwrap_or(defaults.high_density_keywords);
        // An empty keyword would mark every place high-density.
        if high_density_keywords.iter().any(|kw| kw.trim().is_empty()) {
            return Err(AvailabilityConfigError::Invalid(
                "high_density_keywords must not contain empty entries".to_string(),
            ));
        }

        Ok(AvailabilityConfig {
            peak_hours,
            high_density_keywords,
        })
    }
}

#[derive(Debug, Error)]
pub enum AvailabilityConfigError {
    #[error("failed to read availability file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse availability file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid availability config: {0}")]
    Invalid(String),
}

pub fn load_estimator_from_path(
    path: impl AsRef<Path>,
) -> Result<Box<dyn AvailabilityEstimator>, AvailabilityConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let file: AvailabilityFile = serde_json::from_str(&contents)?;
    create_estimator(&file)
}
