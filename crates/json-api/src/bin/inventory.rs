//! Stockline Inventory API Server

use std::{process, sync::Arc};

use salvo::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stockline_app::context::InventoryContext;
use stockline_json::{config::InventoryConfig, router, shutdown, state::InventoryState};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

/// Inventory API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = InventoryConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    let addr = config.socket_addr();

    info!("Starting inventory server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let context =
        match InventoryContext::from_config(&config.database.database_url, config.products.lookup())
            .await
        {
            Ok(context) => context,
            Err(init_error) => {
                error!("failed to initialize app context: {init_error}");

                process::exit(1);
            }
        };

    let router = router::inventory_router(
        InventoryState::from_context(context),
        Arc::new(config.auth),
    );

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
