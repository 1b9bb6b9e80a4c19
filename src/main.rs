//! Flight Data Web Server
//!
//! Entry point for the guest-facing landing pages.

use std::sync::Arc;

use dotenvy::dotenv;
use mimalloc::MiMalloc;

use flight_data_web::{config::AppConfig, server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before anything reads the environment
    let _ = dotenv();

    telemetry::init();

    let config = Arc::new(AppConfig::load()?);
    server::start_server(config).await
}
