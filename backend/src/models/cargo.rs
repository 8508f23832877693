//! Cargo type reference table.
//!
//! `code` is the categorical encoding the delay model was trained on and is
//! independent of the display order of the form.

use serde::Serialize;

/// Generation of the cargo encoding.
pub const CARGO_ENCODING_VERSION: u32 = 1;

/// Name of the cargo type used when a request does not specify one.
pub const DEFAULT_CARGO_TYPE: &str = "Electronics";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CargoRecord {
    pub name: &'static str,
    /// Handling complexity weight in [0, 1]
    pub complexity: f64,
    pub code: u32,
}

const fn cargo(name: &'static str, complexity: f64, code: u32) -> CargoRecord {
    CargoRecord {
        name,
        complexity,
        code,
    }
}

/// Known cargo types, ordered by `code`.
pub const CARGO_TABLE: [CargoRecord; 5] = [
    cargo("Electronics", 0.7, 0),
    cargo("Machinery", 0.5, 1),
    cargo("Standard", 0.3, 2),
    cargo("Perishable", 0.9, 3),
    cargo("Fragile", 0.8, 4),
];

pub fn cargo_by_name(name: &str) -> Option<&'static CargoRecord> {
    CARGO_TABLE.iter().find(|c| c.name == name)
}
