//! Launchdash HTTP Server Binary
//!
//! This is the main entry point for the dashboard REST API server.
//! It loads the launch dataset, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin launchdash-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8050)
//! - `DATASET_PATH`: Launch records CSV (default: data/spacex_launch_dash.csv)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launchdash::http::{create_router, AppState};
use launchdash::parsing::load_dataset;
use launchdash::services::Dashboard;

const DEFAULT_DATASET_PATH: &str = "data/spacex_launch_dash.csv";

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
        .init();

    info!("Starting launchdash HTTP server");

    // Load the dataset once; it is immutable for the process lifetime.
    let dataset_path = env::var("DATASET_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH));
    let dataset = load_dataset(&dataset_path)?;
    info!(
        path = %dataset_path.display(),
        records = dataset.len(),
        sites = dataset.sites().len(),
        "Dataset loaded"
    );

    // Create application state
    let dashboard = Arc::new(Dashboard::new(Arc::new(dataset)));
    let state = AppState::new(dashboard);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8050);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
