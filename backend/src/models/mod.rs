//! Domain types: reference tables, trip payloads, reviews and
//! port-intelligence shapes.

pub mod cargo;
pub mod identity;
pub mod intelligence;
pub mod macros;
pub mod port;
pub mod review;
pub mod trip;

pub use cargo::{cargo_by_name, CargoRecord, CARGO_ENCODING_VERSION, CARGO_TABLE};
pub use identity::Identity;
pub use intelligence::{PortIntelligenceReport, QueryType};
pub use port::{port_by_name, port_code, port_entry, PortRecord, PORT_ENCODING_VERSION, PORT_TABLE};
pub use review::{NewReview, Review, ReviewId};
pub use trip::{FeatureVector, ModelVerdict, PredictionOutcome, PreparedPrediction, TripRequest};
