//! Trip requests and the payloads derived from them.

use serde::{Deserialize, Serialize};

use crate::algorithms::Coordinates;

fn default_cargo_type() -> String {
    super::cargo::DEFAULT_CARGO_TYPE.to_string()
}

fn default_cargo_weight() -> f64 {
    1000.0
}

/// Trip parameters as submitted by a user. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Origin port name (key into the port table)
    pub origin: String,
    /// Destination port name (key into the port table)
    pub destination: String,
    #[serde(default = "default_cargo_type")]
    pub cargo_type: String,
    /// Cargo weight in kilograms
    #[serde(default = "default_cargo_weight")]
    pub cargo_weight: f64,
    /// Calendar date, `YYYY-MM-DD` (an RFC 3339 timestamp is also accepted)
    pub shipping_date: String,
}

/// Fixed-shape numeric payload consumed by the delay model.
///
/// Field names are the wire names the model server reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub cargo_type_encoded: u32,
    pub cargo_weight_tons: f64,
    pub shipping_month: u32,
    pub origin_port_encoded: u32,
    pub destination_port_encoded: u32,
    pub origin_efficiency_score: f64,
    pub destination_efficiency_score: f64,
    pub avg_dwell_time_origin: f64,
    pub customs_clearance_score: f64,
    pub congestion_index: f64,
    pub weather_risk_score: f64,
    pub handling_complexity_score: f64,
}

/// A validated trip with its feature vector and route figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedPrediction {
    pub features: FeatureVector,
    pub origin: String,
    pub destination: String,
    pub origin_coords: Coordinates,
    pub destination_coords: Coordinates,
    /// Great-circle distance, km, one decimal
    pub distance_km: f64,
    /// Estimated transit time, days, one decimal
    pub eta_days: f64,
}

/// What the model server answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelVerdict {
    pub prediction: String,
    pub probability: f64,
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Verdict plus route context, as relayed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutcome {
    pub prediction: String,
    pub probability: f64,
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub origin: String,
    pub destination: String,
    pub origin_coords: Coordinates,
    pub destination_coords: Coordinates,
    /// km
    pub distance: f64,
    /// days
    pub eta: f64,
}

impl PredictionOutcome {
    pub fn new(prepared: PreparedPrediction, verdict: ModelVerdict) -> Self {
        Self {
            prediction: verdict.prediction,
            probability: verdict.probability,
            suggestion: verdict.suggestion,
            note: verdict.note,
            origin: prepared.origin,
            destination: prepared.destination,
            origin_coords: prepared.origin_coords,
            destination_coords: prepared.destination_coords,
            distance: prepared.distance_km,
            eta: prepared.eta_days,
        }
    }
}
