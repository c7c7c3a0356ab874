//! School calendar HTTP server binary.
//!
//! Loads the calendar datasets once, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin calendar-server
//!
//! # Custom data directory and port
//! DATA_DIR=/srv/calendar PORT=9000 cargo run --bin calendar-server
//! ```
//!
//! # Environment Variables
//!
//! - `CALENDAR_CONFIG`: TOML configuration file (default: `calendar.toml` if present)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATA_DIR`: Directory with terms.json, holidays.json, key-dates.json (default: data)
//! - `STATIC_DIR`: Directory served at `/` (default: static)
//! - `CALENDAR_TZ`: Home timezone (default: Pacific/Auckland)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use school_calendar::data::{AppConfig, CalendarDataset};
use school_calendar::http::{create_router, AppState};

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

    info!("Starting school calendar HTTP server");

    let config = AppConfig::load()?;
    let tz = config.tz()?;

    // Load the datasets once; they are read-only from here on
    let dataset = CalendarDataset::load(&config.data_dir, tz)?;
    info!(
        "Calendar data loaded from {} ({} years, timezone {})",
        config.data_dir.display(),
        dataset.years().count(),
        tz.name()
    );

    let state = AppState::new(Arc::new(dataset)).with_static_dir(&config.static_dir);
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("API root: http://{}/api/v1", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
