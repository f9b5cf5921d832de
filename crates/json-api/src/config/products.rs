//! Products Client Config

use clap::Args;

use stockline_app::clients::products::{ProductsLookupConfig, RestProductsLookup};

/// Outbound Products service settings for the Inventory server.
///
/// Leaving the base URL unset runs the ledger standalone: creates skip
/// product validation and detail lookups are rejected.
#[derive(Debug, Args)]
pub struct ProductsClientConfig {
    /// Products service base URL
    #[arg(long, env = "PRODUCTS_BASE_URL")]
    pub base_url: Option<String>,

    /// Header name for the key sent to the Products service
    #[arg(
        long,
        env = "PRODUCTS_API_KEY_HEADER",
        default_value = "X-API-Key"
    )]
    pub api_key_header: String,

    /// Key value sent to the Products service
    #[arg(
        long,
        env = "PRODUCTS_API_KEY_VALUE",
        default_value = "",
        hide_env_values = true
    )]
    pub api_key_value: String,
}

impl ProductsClientConfig {
    /// Build the lookup client, or `None` when no base URL is configured.
    #[must_use]
    pub fn lookup(&self) -> Option<RestProductsLookup> {
        self.base_url.as_ref().map(|base_url| {
            RestProductsLookup::new(ProductsLookupConfig {
                base_url: base_url.clone(),
                api_key_header: self.api_key_header.clone(),
                api_key_value: self.api_key_value.clone(),
            })
        })
    }
}
