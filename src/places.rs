//! Candidate places and adapters from provider-specific result shapes.
//!
//! Places-search results arrive partially populated; anything without usable
//! coordinates is dropped here rather than failing the request.

use crate::error::GuidanceError;
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A parking place to evaluate. `address_hints` is only used as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePlace {
    pub name: String,
    #[serde(default)]
    pub address_hints: String,
    pub location: GeoPoint,
}

/// A Places-search style result, `{name, vicinity, formatted_address,
/// geometry: {location: {lat, lng}}}`, kept as raw JSON so that one broken
/// record never fails the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ProviderPlace(pub Value);

impl ProviderPlace {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Text fields that are missing or not strings read as empty.
    pub fn name(&self) -> &str {
        text_field(&self.0, "name")
    }

    pub fn to_candidate(&self) -> Option<CandidatePlace> {
        let location = self.0.get("geometry")?.as_object()?.get("location")?.as_object()?;
        let lat = coordinate(location.get("lat")?)?;
        let lng = coordinate(location.get("lng")?)?;
        let location = GeoPoint::new(lat, lng).ok()?;

        let address_hints = [
            text_field(&self.0, "vicinity"),
            text_field(&self.0, "formatted_address"),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        Some(CandidatePlace {
            name: self.name().to_string(),
            address_hints,
            location,
        })
    }
}

fn text_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Providers send numbers or numeric strings.
fn coordinate(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    parsed.is_finite().then_some(parsed)
}

/// A Nominatim geocoder hit for a searched location name. It stands in for
/// the user's position; coordinates arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
}

impl NominatimPlace {
    pub fn to_geo_point(&self) -> Result<GeoPoint, GuidanceError> {
        let parse = |raw: &str| {
            raw.trim().parse::<f64>().map_err(|err| {
                GuidanceError::InvalidInput(format!(
                    "geocoder hit {:?} has unparsable coordinate {raw:?}: {err}",
                    self.display_name
                ))
            })
        };
        GeoPoint::new(parse(&self.lat)?, parse(&self.lon)?)
    }
}

/// Adapt provider results, silently dropping those with unusable geometry.
pub fn candidates_from_provider(places: &[ProviderPlace]) -> Vec<CandidatePlace> {
    places
        .iter()
        .filter_map(|place| {
            let candidate = place.to_candidate();
            if candidate.is_none() {
                tracing::debug!(name = place.name(), "Skipping place without usable geometry");
            }
            candidate
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn places_result_becomes_candidate() {
        let place = ProviderPlace::from_value(json!({
            "name": "Municipal Parking - Market Road",
            "vicinity": "Market Road",
            "formatted_address": "Near Jule Solapur",
            "geometry": {"location": {"lat": 17.6510, "lng": 75.9200}}
        }));

        let candidate = place.to_candidate().expect("candidate");

        assert_eq!(candidate.name, "Municipal Parking - Market Road");
        assert_eq!(candidate.address_hints, "Market Road Near Jule Solapur");
        assert_eq!(candidate.location.latitude(), 17.6510);
        assert_eq!(candidate.location.longitude(), 75.9200);
    }

    #[test]
    fn numeric_string_coordinates_are_accepted() {
        let place = ProviderPlace::from_value(json!({
            "name": "Lot",
            "geometry": {"location": {"lat": "17.6555", "lng": " 75.9130 "}}
        }));

        let candidate = place.to_candidate().expect("candidate");

        assert_eq!(candidate.location.longitude(), 75.9130);
        assert_eq!(candidate.address_hints, "");
    }

    #[test]
    fn non_string_text_fields_read_as_empty() {
        let place = ProviderPlace::from_value(json!({
            "name": 7,
            "vicinity": ["Market Road"],
            "formatted_address": "Near Jule Solapur",
            "geometry": {"location": {"lat": 17.0, "lng": 75.0}}
        }));

        let candidate = place.to_candidate().expect("candidate");

        assert_eq!(candidate.name, "");
        assert_eq!(candidate.address_hints, "Near Jule Solapur");
    }

    #[test]
    fn missing_or_malformed_geometry_is_skipped() -> Result<(), serde_json::Error> {
        let places: Vec<ProviderPlace> = serde_json::from_value(json!([
            {"name": "no geometry"},
            {"name": "string geometry", "geometry": "oops"},
            {"name": "no location", "geometry": {}},
            {"name": "array location", "geometry": {"location": [75.9, 17.6]}},
            {"name": "no lng", "geometry": {"location": {"lat": 17.0}}},
            {"name": "text", "geometry": {"location": {"lat": "north", "lng": 75.0}}},
            {"name": "object", "geometry": {"location": {"lat": {}, "lng": 75.0}}},
            "not even an object",
            null,
            {"name": "ok", "geometry": {"location": {"lat": 17.0, "lng": 75.0}}}
        ]))?;

        let candidates = candidates_from_provider(&places);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "ok");
        Ok(())
    }

    #[test]
    fn nominatim_hit_becomes_geo_point() -> Result<(), Box<dyn std::error::Error>> {
        let hit: NominatimPlace = serde_json::from_value(json!({
            "place_id": 1234,
            "lat": "17.6632",
            "lon": "75.9178",
            "display_name": "Ashok Chowk, Solapur, Maharashtra, India"
        }))?;

        let point = hit.to_geo_point()?;

        assert_eq!(point.latitude(), 17.6632);
        assert_eq!(point.longitude(), 75.9178);
        Ok(())
    }

    #[test]
    fn unparsable_nominatim_hit_is_invalid_input() {
        for (lat, lon) in [("NaN", "75.9"), ("17.6", "east")] {
            let hit = NominatimPlace {
                lat: lat.to_string(),
                lon: lon.to_string(),
                display_name: String::new(),
            };
            assert!(matches!(
                hit.to_geo_point(),
                Err(GuidanceError::InvalidInput(_))
            ));
        }
    }
}
