//! SmartShip HTTP Server Binary
//!
//! # Usage
//!
//! ```bash
//! GNEWS_API_KEY=... GOOGLE_AI_API_KEY=... cargo run --bin smartship-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 5000)
//! - `GNEWS_API_KEY`, `GNEWS_BASE_URL`: news search upstream
//! - `GOOGLE_AI_API_KEY`, `GEMINI_BASE_URL`, `GEMINI_MODEL`: port intelligence
//! - `PREDICTION_API_URL`: delay model server (default: http://localhost:5001)
//! - `HTTP_TIMEOUT_SECS`: outbound request timeout
//! - `SMARTSHIP_CONFIG`: path to a TOML config file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use smartship::config::AppConfig;
use smartship::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting SmartShip HTTP Server");

    let config = AppConfig::load()?;
    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
