//! Parking guidance for Solapur: pressure alerts, nearby restricted zones and
//! ranked walkable parking recommendations with estimated availability.

pub mod api;
pub mod config;
pub mod error;
pub mod estimation;
pub mod geo;
pub mod guidance;
pub mod places;
pub mod state;
pub mod zones;
