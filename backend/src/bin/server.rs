//! Launch Dashboard Server Binary
//!
//! Loads the launch CSV once, then serves the dashboard page and its JSON API.
//!
//! # Usage
//!
//! ```bash
//! LAUNCH_DATA=spacex_launch_dash.csv cargo run --bin launch-dash-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8056)
//! - `LAUNCH_DATA`: Launch CSV path (default: spacex_launch_dash.csv)
//! - `PAYLOAD_STEP`: Payload slider step in kg (default: 1000)
//! - `RUST_LOG`: Log level (default: info)
//!
//! Values in `dashboard.toml` are used when present; environment variables win.

use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launch_dash::db::{self, DashboardConfig};
use launch_dash::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
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

    info!("Starting launch dashboard server");

    let config = DashboardConfig::load().context("Failed to load dashboard configuration")?;

    // Load the dataset once; a missing or malformed file aborts startup
    let dataset = Arc::clone(db::init_dataset(&config.data.path)?);
    info!(
        records = dataset.len(),
        sites = dataset.launch_sites().len(),
        "Dataset initialized successfully"
    );

    let state = AppState::new(dataset, config.controls.clone());
    let app = create_router(state);

    let addr = config.bind_address()?;
    info!("Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
