use crate::config::Config;
use crate::estimation::heuristic::HeuristicEstimator;
use crate::estimation::load_estimator_from_path;
use crate::estimation::model::AvailabilityEstimator;
use crate::guidance::GuidanceAnalyzer;
use crate::zones::{ZoneRegistry, load_registry_from_path};
use std::sync::Arc;
use time::{OffsetDateTime, UtcOffset};
use tracing::{info, warn};

/// Shared request state. Everything here is immutable after startup, so it is
/// shared through `Arc` without a lock.
#[derive(Debug, Clone)]
pub struct AppState {
    analyzer: GuidanceAnalyzer,
    local_offset: UtcOffset,
}

impl AppState {
    pub fn new(analyzer: GuidanceAnalyzer, local_offset: UtcOffset) -> Self {
        Self {
            analyzer,
            local_offset,
        }
    }

    /// Built-in Solapur zones with the default heuristic model.
    pub fn with_defaults(local_offset: UtcOffset) -> Self {
        let analyzer = GuidanceAnalyzer::new(
            Arc::new(ZoneRegistry::solapur()),
            Arc::new(HeuristicEstimator::with_defaults()),
        );
        Self::new(analyzer, local_offset)
    }

    /// Build from config. Unreadable or invalid reference files fall back to
    /// the built-in defaults with a warning.
    pub fn from_config(config: &Config, local_offset: UtcOffset) -> Self {
        let estimator: Arc<dyn AvailabilityEstimator> = match config.availability_path() {
            Some(path) => match load_estimator_from_path(path) {
                Ok(estimator) => {
                    info!(path = %path.display(), model = estimator.model_name(), "Availability model loaded");
                    Arc::from(estimator)
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load availability config, using default");
                    Arc::new(HeuristicEstimator::with_defaults())
                }
            },
            None => {
                info!("No availability path configured, using default model");
                Arc::new(HeuristicEstimator::with_defaults())
            }
        };

        let registry = match config.zones_path() {
            Some(path) => match load_registry_from_path(path) {
                Ok(registry) => {
                    info!(
                        path = %path.display(),
                        pressure_zones = registry.pressure_zones().len(),
                        no_parking_zones = registry.no_parking_zones().len(),
                        parking_lots = registry.parking_lots().len(),
                        "Zone registry loaded"
                    );
                    registry
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load zone registry, using built-in Solapur data");
                    ZoneRegistry::solapur()
                }
            },
            None => {
                info!("No zones path configured, using built-in Solapur data");
                ZoneRegistry::solapur()
            }
        };

        Self::new(
            GuidanceAnalyzer::new(Arc::new(registry), estimator),
            local_offset,
        )
    }

    pub fn analyzer(&self) -> &GuidanceAnalyzer {
        &self.analyzer
    }

    pub fn local_offset(&self) -> UtcOffset {
        self.local_offset
    }

    /// Current wall-clock time in the configured local offset.
    pub fn local_now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.local_offset)
    }
}
