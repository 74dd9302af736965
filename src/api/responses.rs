use crate::estimation::model::AvailabilityResult;
use crate::guidance::GuidanceResult;
use crate::zones::{NoParkingZone, ParkingLot, PressureZone};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GuidanceSuccessResponse {
    #[serde(flatten)]
    pub result: GuidanceResult,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ApiErrorResponse {
    pub error_code: ApiErrorCode,
    pub error_message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    InvalidInput,
    InternalError,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthSuccessResponse {
    pub status: HealthStatus,
    pub availability_model: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ZonesSuccessResponse {
    pub pressure_zones: Vec<PressureZone>,
    pub no_parking_zones: Vec<NoParkingZone>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LotStatusResponse {
    #[serde(flatten)]
    pub lot: ParkingLot,
    pub availability: AvailabilityResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LotsSuccessResponse {
    pub lots: Vec<LotStatusResponse>,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::model::AvailabilityLevel;
    use crate::geo::GeoPoint;
    use serde_json::json;

    #[test]
    fn guidance_response_omits_alert_when_none() {
        let response = GuidanceSuccessResponse {
            result: GuidanceResult {
                pressure_alert: None,
                recommendations: Vec::new(),
                nearby_pressure_zones: Vec::new(),
                nearby_no_parking_zones: Vec::new(),
            },
            timestamp: "2026-01-11T09:00:00+05:30".to_string(),
        };

        let value = serde_json::to_value(response).expect("serialize guidance response");
        assert_eq!(
            value,
            json!({
                "recommendations": [],
                "nearby_pressure_zones": [],
                "nearby_no_parking_zones": [],
                "timestamp": "2026-01-11T09:00:00+05:30"
            })
        );
    }

    #[test]
    fn guidance_response_flattens_result_fields() {
        let response = GuidanceSuccessResponse {
            result: GuidanceResult {
                pressure_alert: Some("High parking pressure near Depot (9 AM)".to_string()),
                recommendations: Vec::new(),
                nearby_pressure_zones: Vec::new(),
                nearby_no_parking_zones: Vec::new(),
            },
            timestamp: "2026-01-11T09:00:00+05:30".to_string(),
        };

        let value = serde_json::to_value(response).expect("serialize guidance response");
        assert_eq!(
            value["pressure_alert"],
            "High parking pressure near Depot (9 AM)"
        );
        assert!(value.get("result").is_none());
    }

    #[test]
    fn error_response_uses_screaming_snake_case_code() {
        let response = ApiErrorResponse {
            error_code: ApiErrorCode::InvalidInput,
            error_message: "bad coordinates".to_string(),
            timestamp: "2026-01-11T12:32:00Z".to_string(),
        };

        let value = serde_json::to_value(response).expect("serialize error response");
        assert_eq!(
            value,
            json!({
                "error_code": "INVALID_INPUT",
                "error_message": "bad coordinates",
                "timestamp": "2026-01-11T12:32:00Z"
            })
        );
    }

    #[test]
    fn health_response_serializes_status() {
        let response = HealthSuccessResponse {
            status: HealthStatus::Degraded,
            availability_model: "heuristic".to_string(),
            timestamp: "2026-01-11T12:33:00Z".to_string(),
        };

        let value = serde_json::to_value(response).expect("serialize health response");
        assert_eq!(
            value,
            json!({
                "status": "degraded",
                "availability_model": "heuristic",
                "timestamp": "2026-01-11T12:33:00Z"
            })
        );
    }

    #[test]
    fn lot_status_flattens_lot_fields() {
        let response = LotStatusResponse {
            lot: ParkingLot {
                id: "p9".to_string(),
                name: "Depot Lot".to_string(),
                address: "Depot Road".to_string(),
                capacity: None,
                location: GeoPoint::new(17.5, 75.5).expect("finite point"),
            },
            availability: AvailabilityResult {
                level: AvailabilityLevel::LikelyAvailable,
                label: "Likely Available (estimate)".to_string(),
                color_token: "#43a047".to_string(),
                reason: "Off-peak".to_string(),
            },
        };

        let value = serde_json::to_value(response).expect("serialize lot status");
        assert_eq!(
            value,
            json!({
                "id": "p9",
                "name": "Depot Lot",
                "address": "Depot Road",
                "location": {"lat": 17.5, "lng": 75.5},
                "availability": {
                    "level": "LIKELY_AVAILABLE",
                    "label": "Likely Available (estimate)",
                    "color_token": "#43a047",
                    "reason": "Off-peak"
                }
            })
        );
    }
}
