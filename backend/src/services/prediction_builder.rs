//! Turns a user trip request into the delay model's feature vector.
//!
//! Everything here is synchronous and side-effect free; invalid trips are
//! rejected before anything touches the network.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::algorithms::{haversine_km, round_to_tenth};
use crate::error::{ServiceError, ServiceResult};
use crate::models::{
    cargo_by_name, port_entry, FeatureVector, PreparedPrediction, TripRequest,
};

/// Assumed transit speed in km/h (~30 knots).
pub const TRANSIT_SPEED_KMH: f64 = 55.56;

/// Estimated transit time in days for a distance in km, one decimal.
pub fn estimate_transit_days(distance_km: f64) -> f64 {
    round_to_tenth(distance_km / TRANSIT_SPEED_KMH / 24.0)
}

/// Parse a shipping date given as `YYYY-MM-DD` or as an RFC 3339 timestamp.
pub fn parse_shipping_date(raw: &str) -> ServiceResult<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| ServiceError::invalid_input(format!("Invalid shipping date: '{}'", raw)))
}

/// Validate `trip` and assemble its feature vector.
///
/// `today` is the earliest acceptable shipping date.
pub fn build_prediction_request(
    trip: &TripRequest,
    today: NaiveDate,
) -> ServiceResult<PreparedPrediction> {
    if trip.origin == trip.destination {
        return Err(ServiceError::invalid_input(
            "Origin and destination ports cannot be the same.",
        ));
    }

    let (origin_code, origin) = port_entry(&trip.origin).ok_or_else(|| {
        ServiceError::invalid_input(format!("Unknown origin port: '{}'", trip.origin))
    })?;
    let (destination_code, destination) = port_entry(&trip.destination).ok_or_else(|| {
        ServiceError::invalid_input(format!("Unknown destination port: '{}'", trip.destination))
    })?;
    let cargo = cargo_by_name(&trip.cargo_type).ok_or_else(|| {
        ServiceError::invalid_input(format!("Unknown cargo type: '{}'", trip.cargo_type))
    })?;

    if !trip.cargo_weight.is_finite() || trip.cargo_weight < 0.0 {
        return Err(ServiceError::invalid_input(
            "Cargo weight must be a non-negative number of kilograms.",
        ));
    }

    let shipping_date = parse_shipping_date(&trip.shipping_date)?;
    if shipping_date < today {
        return Err(ServiceError::invalid_input(format!(
            "Shipping date {} is in the past.",
            shipping_date
        )));
    }

    let distance = haversine_km(origin.coordinates(), destination.coordinates());

    let features = FeatureVector {
        cargo_type_encoded: cargo.code,
        cargo_weight_tons: trip.cargo_weight / 1000.0,
        shipping_month: shipping_date.month(),
        origin_port_encoded: origin_code,
        destination_port_encoded: destination_code,
        origin_efficiency_score: origin.efficiency,
        destination_efficiency_score: destination.efficiency,
        avg_dwell_time_origin: origin.dwell_days,
        customs_clearance_score: origin.clearance,
        congestion_index: origin.congestion,
        weather_risk_score: origin.weather_risk,
        handling_complexity_score: cargo.complexity,
    };

    Ok(PreparedPrediction {
        features,
        origin: origin.name.to_string(),
        destination: destination.name.to_string(),
        origin_coords: origin.coordinates(),
        destination_coords: destination.coordinates(),
        distance_km: round_to_tenth(distance),
        eta_days: estimate_transit_days(distance),
    })
}
