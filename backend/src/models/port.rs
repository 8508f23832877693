//! Port reference table.
//!
//! The delay model was trained with each port encoded as its position in this
//! table, so the order below is part of the contract with the model server.
//! Append new ports at the end and bump [`PORT_ENCODING_VERSION`]; never
//! reorder or remove entries.

use serde::Serialize;

use crate::algorithms::Coordinates;

/// Generation of the positional port encoding.
pub const PORT_ENCODING_VERSION: u32 = 1;

/// Static operational profile of a port.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortRecord {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// Operational efficiency score in [0, 1]
    pub efficiency: f64,
    /// Average cargo dwell time in days
    pub dwell_days: f64,
    /// Customs clearance score in [0, 1]
    pub clearance: f64,
    /// Congestion index in [0, 1]
    pub congestion: f64,
    /// Weather risk score in [0, 1]
    pub weather_risk: f64,
}

impl PortRecord {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

#[allow(clippy::too_many_arguments)]
const fn port(
    name: &'static str,
    lat: f64,
    lon: f64,
    efficiency: f64,
    dwell_days: f64,
    clearance: f64,
    congestion: f64,
    weather_risk: f64,
) -> PortRecord {
    PortRecord {
        name,
        lat,
        lon,
        efficiency,
        dwell_days,
        clearance,
        congestion,
        weather_risk,
    }
}

/// All known ports, in encoding order.
pub const PORT_TABLE: [PortRecord; 13] = [
    port("Shanghai", 31.2198, 121.4869, 0.92, 1.1, 0.95, 0.25, 0.2),
    port("Nhava Sheva (JNPT)", 18.952, 72.948, 0.7, 2.8, 0.65, 0.6, 0.6),
    port("Mundra", 22.746, 69.7, 0.76, 2.5, 0.68, 0.55, 0.55),
    port("Jebel Ali", 25.0113, 55.0612, 0.8, 1.9, 0.8, 0.5, 0.45),
    port("Busan", 35.1796, 129.0756, 0.88, 1.3, 0.9, 0.35, 0.25),
    port("Singapore", 1.3521, 103.8198, 0.95, 1.0, 0.92, 0.2, 0.15),
    port("Rotterdam", 51.9244, 4.4777, 0.93, 1.2, 0.91, 0.28, 0.22),
    port("Hamburg", 53.5511, 9.9937, 0.9, 1.4, 0.89, 0.3, 0.2),
    port("Tanger Med", 35.8844, -5.4975, 0.65, 3.2, 0.5, 0.75, 0.7),
    port("Los Angeles", 34.0522, -118.2437, 0.85, 1.5, 0.85, 0.4, 0.3),
    port("New York/New Jersey", 40.7128, -74.006, 0.8, 2.0, 0.82, 0.45, 0.4),
    port("Santos", -23.9608, -46.3336, 0.6, 3.5, 0.45, 0.8, 0.75),
    port("Sydney", -33.8688, 151.2093, 0.78, 2.2, 0.76, 0.5, 0.5),
];

/// Look up a port by its exact name.
pub fn port_by_name(name: &str) -> Option<&'static PortRecord> {
    PORT_TABLE.iter().find(|p| p.name == name)
}

/// Look up a port together with its positional encoding.
pub fn port_entry(name: &str) -> Option<(u32, &'static PortRecord)> {
    PORT_TABLE
        .iter()
        .enumerate()
        .find(|(_, p)| p.name == name)
        .map(|(idx, p)| (idx as u32, p))
}

/// Positional encoding of a port, as fed to the delay model.
pub fn port_code(name: &str) -> Option<u32> {
    port_entry(name).map(|(code, _)| code)
}
