//! Parking guidance: pressure alert, nearby zones and ranked walkable
//! recommendations for a user location.

use crate::estimation::model::{AvailabilityEstimator, AvailabilityLevel, AvailabilityResult};
use crate::geo::{GeoPoint, calculate_distance, estimate_walking_time};
use crate::places::{CandidatePlace, ProviderPlace, candidates_from_provider};
use crate::zones::{NoParkingZone, PressureZone, Severity, ZoneRegistry};
use serde::Serialize;
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::debug;

/// Distance beyond a pressure zone's radius that still counts as affected.
pub const PRESSURE_ZONE_BUFFER_M: f64 = 500.0;
/// No-parking zones are legal boundaries, so the buffer is tighter.
pub const NO_PARKING_ZONE_BUFFER_M: f64 = 200.0;
/// Candidates farther than this are not walkable. The bound is inclusive.
pub const MAX_WALKING_DISTANCE_M: f64 = 1000.0;
pub const MAX_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub place: CandidatePlace,
    pub distance_meters: u32,
    pub walking_time_minutes: u32,
    pub availability: AvailabilityResult,
    pub reason_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidanceResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_alert: Option<String>,
    pub recommendations: Vec<Recommendation>,
    pub nearby_pressure_zones: Vec<PressureZone>,
    pub nearby_no_parking_zones: Vec<NoParkingZone>,
}

#[derive(Debug, Clone)]
pub struct GuidanceAnalyzer {
    registry: Arc<ZoneRegistry>,
    estimator: Arc<dyn AvailabilityEstimator>,
}

impl GuidanceAnalyzer {
    pub fn new(registry: Arc<ZoneRegistry>, estimator: Arc<dyn AvailabilityEstimator>) -> Self {
        Self {
            registry,
            estimator,
        }
    }

    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }

    pub fn estimator(&self) -> &dyn AvailabilityEstimator {
        self.estimator.as_ref()
    }

    pub fn analyze(
        &self,
        user_location: GeoPoint,
        candidates: &[CandidatePlace],
        now: OffsetDateTime,
    ) -> GuidanceResult {
        let nearby_pressure_zones: Vec<PressureZone> = self
            .registry
            .pressure_zones()
            .iter()
            .filter(|zone| {
                calculate_distance(user_location, zone.center)
                    <= zone.radius_m + PRESSURE_ZONE_BUFFER_M
            })
            .cloned()
            .collect();

        let nearby_no_parking_zones: Vec<NoParkingZone> = self
            .registry
            .no_parking_zones()
            .iter()
            .filter(|zone| {
                calculate_distance(user_location, zone.center)
                    <= zone.radius_m + NO_PARKING_ZONE_BUFFER_M
            })
            .cloned()
            .collect();

        let pressure_alert = pressure_alert(&nearby_pressure_zones);
        let recommendations = self.recommend(user_location, candidates, now);

        debug!(
            pressure_zones = nearby_pressure_zones.len(),
            no_parking_zones = nearby_no_parking_zones.len(),
            candidates = candidates.len(),
            recommendations = recommendations.len(),
            "Parking conditions analyzed"
        );

        GuidanceResult {
            pressure_alert,
            recommendations,
            nearby_pressure_zones,
            nearby_no_parking_zones,
        }
    }

    /// Like [`analyze`](Self::analyze) but takes provider-shaped records and
    /// drops those with missing or malformed geometry.
    pub fn analyze_provider_places(
        &self,
        user_location: GeoPoint,
        places: &[ProviderPlace],
        now: OffsetDateTime,
    ) -> GuidanceResult {
        let candidates = candidates_from_provider(places);
        self.analyze(user_location, &candidates, now)
    }

    /// Analyze against the registry's own parking lots.
    pub fn analyze_catalog(&self, user_location: GeoPoint, now: OffsetDateTime) -> GuidanceResult {
        let candidates: Vec<CandidatePlace> = self
            .registry
            .parking_lots()
            .iter()
            .map(|lot| lot.to_candidate())
            .collect();
        self.analyze(user_location, &candidates, now)
    }

    fn recommend(
        &self,
        user_location: GeoPoint,
        candidates: &[CandidatePlace],
        now: OffsetDateTime,
    ) -> Vec<Recommendation> {
        let mut scored: Vec<(f64, Recommendation)> = candidates
            .iter()
            .filter_map(|place| {
                let distance = calculate_distance(user_location, place.location);
                if !within_walking_distance(distance) {
                    return None;
                }
                let availability = self.estimator.estimate(place, now);
                let reason_text = reason_text(availability.level).to_string();
                Some((
                    distance,
                    Recommendation {
                        place: place.clone(),
                        distance_meters: distance.round() as u32,
                        walking_time_minutes: estimate_walking_time(distance),
                        availability,
                        reason_text,
                    },
                ))
            })
            .collect();

        scored.sort_by(|(a_distance, a), (b_distance, b)| {
            a.availability
                .level
                .ordinal()
                .cmp(&b.availability.level.ordinal())
                .then(a_distance.total_cmp(b_distance))
        });
        scored.truncate(MAX_RECOMMENDATIONS);
        scored.into_iter().map(|(_, rec)| rec).collect()
    }
}

pub fn within_walking_distance(distance_m: f64) -> bool {
    distance_m <= MAX_WALKING_DISTANCE_M
}

/// First high-severity zone in registry order; medium and low never alert.
fn pressure_alert(nearby: &[PressureZone]) -> Option<String> {
    nearby
        .iter()
        .find(|zone| zone.severity == Severity::High)
        .map(|zone| {
            format!(
                "High parking pressure near {} ({})",
                zone.name, zone.peak_time_label
            )
        })
}

fn reason_text(level: AvailabilityLevel) -> &'static str {
    match level {
        AvailabilityLevel::LikelyAvailable => "Good availability expected",
        AvailabilityLevel::Limited => "May have limited spots",
        AvailabilityLevel::LikelyFull => "Likely to be full",
    }
}
