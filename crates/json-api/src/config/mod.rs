//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig, logging::LoggingConfig, products::ProductsClientConfig,
    server::ServerRuntimeConfig,
};

pub mod auth;
pub mod db;
pub mod logging;
pub mod products;
pub mod server;

pub use auth::ApiKeyConfig;

/// Stockline Inventory API server configuration.
#[derive(Debug, Parser)]
#[command(name = "stockline-inventory", about = "Stockline Inventory API Server", long_about = None)]
pub struct InventoryConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Inbound API-key settings.
    #[command(flatten)]
    pub auth: ApiKeyConfig,

    /// Outbound Products service settings.
    #[command(flatten)]
    pub products: ProductsClientConfig,
}

impl InventoryConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

/// Stockline Products API server configuration.
#[derive(Debug, Parser)]
#[command(name = "stockline-products", about = "Stockline Products API Server", long_about = None)]
pub struct ProductsConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Inbound API-key settings.
    #[command(flatten)]
    pub auth: ApiKeyConfig,
}

impl ProductsConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
