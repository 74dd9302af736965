//! Read-only reference catalog of pressure zones, no-parking zones and
//! designated parking lots.

use crate::error::GuidanceError;
use crate::geo::GeoPoint;
use crate::places::CandidatePlace;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

pub mod solapur;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// An area historically associated with parking congestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureZone {
    pub id: String,
    pub name: String,
    pub center: GeoPoint,
    pub radius_m: f64,
    pub severity: Severity,
    /// Free text, never parsed.
    pub peak_time_label: String,
    pub report_count: u32,
}

/// An area with a (possibly time-bound) parking restriction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoParkingZone {
    pub id: String,
    pub name: String,
    pub center: GeoPoint,
    pub radius_m: f64,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window_label: Option<String>,
}

/// A designated municipal parking lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingLot {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    pub location: GeoPoint,
}

impl ParkingLot {
    pub fn to_candidate(&self) -> CandidatePlace {
        CandidatePlace {
            name: self.name.clone(),
            address_hints: self.address.clone(),
            location: self.location,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneRegistry {
    pressure_zones: Vec<PressureZone>,
    no_parking_zones: Vec<NoParkingZone>,
    parking_lots: Vec<ParkingLot>,
}

impl ZoneRegistry {
    /// Build a registry, keeping insertion order. Radii must be finite and
    /// positive and ids unique within each list.
    pub fn new(
        pressure_zones: Vec<PressureZone>,
        no_parking_zones: Vec<NoParkingZone>,
        parking_lots: Vec<ParkingLot>,
    ) -> Result<Self, GuidanceError> {
        let registry = Self {
            pressure_zones,
            no_parking_zones,
            parking_lots,
        };
        registry.validate()?;
        Ok(registry)
    }

    pub fn pressure_zones(&self) -> &[PressureZone] {
        &self.pressure_zones
    }

    pub fn no_parking_zones(&self) -> &[NoParkingZone] {
        &self.no_parking_zones
    }

    pub fn parking_lots(&self) -> &[ParkingLot] {
        &self.parking_lots
    }

    pub fn is_empty(&self) -> bool {
        self.pressure_zones.is_empty()
            && self.no_parking_zones.is_empty()
            && self.parking_lots.is_empty()
    }

    pub fn validate(&self) -> Result<(), GuidanceError> {
        for zone in &self.pressure_zones {
            check_radius(&zone.id, zone.radius_m)?;
        }
        for zone in &self.no_parking_zones {
            check_radius(&zone.id, zone.radius_m)?;
        }
        check_unique(self.pressure_zones.iter().map(|z| z.id.as_str()))?;
        check_unique(self.no_parking_zones.iter().map(|z| z.id.as_str()))?;
        check_unique(self.parking_lots.iter().map(|lot| lot.id.as_str()))?;
        Ok(())
    }
}

fn check_radius(id: &str, radius_m: f64) -> Result<(), GuidanceError> {
    if radius_m.is_finite() && radius_m > 0.0 {
        Ok(())
    } else {
        Err(GuidanceError::InvalidZone {
            id: id.to_string(),
            reason: format!("radius must be positive, got {radius_m}"),
        })
    }
}

fn check_unique<'a>(ids: impl Iterator<Item = &'a str>) -> Result<(), GuidanceError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(GuidanceError::DuplicateZoneId(id.to_string()));
        }
    }
    Ok(())
}

/// On-disk zone reference data.
#[derive(Debug, Deserialize)]
pub struct ZoneFile {
    #[serde(default)]
    pub pressure_zones: Vec<PressureZone>,
    #[serde(default)]
    pub no_parking_zones: Vec<NoParkingZone>,
    #[serde(default)]
    pub parking_lots: Vec<ParkingLot>,
}

#[derive(Debug, Error)]
pub enum ZoneFileError {
    #[error("failed to read zone file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse zone file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid zone data: {0}")]
    Registry(#[from] GuidanceError),
}

pub fn load_registry_from_path(path: impl AsRef<Path>) -> Result<ZoneRegistry, ZoneFileError> {
    let contents = std::fs::read_to_string(path)?;
    let file: ZoneFile = serde_json::from_str(&contents)?;
    let registry = ZoneRegistry::new(file.pressure_zones, file.no_parking_zones, file.parking_lots)?;
    Ok(registry)
}
