//! Pure numeric routines with no I/O.

pub mod geodesy;

pub use geodesy::{haversine_km, round_to_tenth, Coordinates, EARTH_RADIUS_KM};
