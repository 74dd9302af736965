//! Built-in Solapur reference data, derived from citizen congestion reports
//! and municipal parking rules.

use super::{NoParkingZone, ParkingLot, PressureZone, Severity, ZoneRegistry};
use crate::geo::GeoPoint;

const STATION_ROAD: GeoPoint = GeoPoint::new_unchecked(17.6599, 75.9064);
const MURARJI_PETH: GeoPoint = GeoPoint::new_unchecked(17.6589, 75.9021);
const BUS_STAND_CIRCLE: GeoPoint = GeoPoint::new_unchecked(17.6555, 75.9130);
const ASHOK_CHOWK: GeoPoint = GeoPoint::new_unchecked(17.6632, 75.9178);
const JULE_SOLAPUR_MARKET: GeoPoint = GeoPoint::new_unchecked(17.6510, 75.9200);

impl ZoneRegistry {
    pub fn solapur() -> Self {
        Self {
            pressure_zones: pressure_zones(),
            no_parking_zones: no_parking_zones(),
            parking_lots: parking_lots(),
        }
    }
}

fn pressure_zone(
    id: &str,
    name: &str,
    center: GeoPoint,
    radius_m: f64,
    severity: Severity,
    peak_time_label: &str,
    report_count: u32,
) -> PressureZone {
    PressureZone {
        id: id.to_string(),
        name: name.to_string(),
        center,
        radius_m,
        severity,
        peak_time_label: peak_time_label.to_string(),
        report_count,
    }
}

#[rustfmt::skip]
pub fn pressure_zones() -> Vec<PressureZone> {
    vec![
        pressure_zone("1", "Station Road Junction", STATION_ROAD, 300.0, Severity::High, "8:30 - 9:30 AM", 47),
        pressure_zone("2", "Murarji Peth Main Road", MURARJI_PETH, 400.0, Severity::High, "5:00 - 6:30 PM", 38),
        pressure_zone("3", "Bus Stand Circle", BUS_STAND_CIRCLE, 250.0, Severity::Medium, "7:00 - 8:00 AM", 29),
        pressure_zone("4", "Ashok Chowk", ASHOK_CHOWK, 200.0, Severity::Medium, "6:00 - 7:00 PM", 24),
        pressure_zone("5", "Jule Solapur Market", JULE_SOLAPUR_MARKET, 350.0, Severity::Medium, "10:00 AM - 1:00 PM", 41),
    ]
}

fn no_parking_zone(
    id: &str,
    name: &str,
    center: GeoPoint,
    radius_m: f64,
    reason: &str,
    time_window_label: &str,
) -> NoParkingZone {
    NoParkingZone {
        id: id.to_string(),
        name: name.to_string(),
        center,
        radius_m,
        reason: reason.to_string(),
        time_window_label: Some(time_window_label.to_string()),
    }
}

#[rustfmt::skip]
pub fn no_parking_zones() -> Vec<NoParkingZone> {
    vec![
        no_parking_zone("np1", "Station Road (Peak Hours)", STATION_ROAD, 200.0, "No parking 8:00-10:00 AM", "8:00 AM - 10:00 AM"),
        no_parking_zone("np2", "Murarji Peth (Evening)", MURARJI_PETH, 300.0, "Hawker-free enforcement zone", "5:00 PM - 7:00 PM"),
        no_parking_zone("np3", "Bus Stand Circle", BUS_STAND_CIRCLE, 150.0, "No parking near bus stop", "All day"),
    ]
}

fn parking_lot(id: &str, name: &str, address: &str, capacity: u32, lat: f64, lng: f64) -> ParkingLot {
    ParkingLot {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        capacity: Some(capacity),
        location: GeoPoint::new_unchecked(lat, lng),
    }
}

#[rustfmt::skip]
pub fn parking_lots() -> Vec<ParkingLot> {
    vec![
        parking_lot("p1", "Railway Colony Ground Parking", "Near Railway Station, Station Road", 50, 17.6599, 75.9064),
        parking_lot("p2", "Municipal Parking - Market Road", "Market Road, Near Jule Solapur", 80, 17.6510, 75.9200),
        parking_lot("p3", "Bus Stand Parking Area", "Solapur Bus Stand Circle", 60, 17.6555, 75.9130),
        parking_lot("p4", "Ashok Chowk Parking", "Ashok Chowk Junction", 40, 17.6632, 75.9178),
        parking_lot("p5", "Murarji Peth Parking Lot", "Murarji Peth Main Road", 35, 17.6589, 75.9021),
        parking_lot("p6", "Akkalkot Road Parking", "Akkalkot Road, Near Naka", 45, 17.6480, 75.8980),
        parking_lot("p7", "Vijapur Road Parking", "Vijapur Road", 30, 17.6700, 75.9250),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_data_is_valid() {
        let registry = ZoneRegistry::solapur();
        assert_eq!(registry.validate(), Ok(()));
        assert_eq!(registry.pressure_zones().len(), 5);
        assert_eq!(registry.no_parking_zones().len(), 3);
        assert_eq!(registry.parking_lots().len(), 7);
    }

    #[test]
    fn high_severity_zones_come_first() {
        let severities: Vec<_> = pressure_zones().iter().map(|z| z.severity).collect();
        assert_eq!(
            severities,
            [
                Severity::High,
                Severity::High,
                Severity::Medium,
                Severity::Medium,
                Severity::Medium
            ]
        );
    }
}
