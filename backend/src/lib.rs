//! # SmartShip Backend
//!
//! Maritime logistics service: shipment delay prediction, shipping news,
//! AI-assisted port intelligence and user reviews.
//!
//! ## Architecture
//!
//! - [`algorithms`]: great-circle distance and rounding helpers
//! - [`models`]: port and cargo reference tables, trip/review/identity types
//! - [`services`]: prediction-request builder and the gateways to the model
//!   server, the news search API and the generative-AI endpoint
//! - [`db`]: review storage behind a repository trait
//! - [`config`]: layered configuration (defaults, TOML file, environment)
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The delay model itself, authentication and the web client live outside
//! this crate; the service reaches the model over HTTP and trusts caller
//! identity forwarded by the identity provider.

pub mod algorithms;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
