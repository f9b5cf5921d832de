//! API-key Config

use clap::Args;

/// Inbound API-key settings.
///
/// An empty value disables the check; every request then proceeds as the
/// api-key user.
#[derive(Debug, Args)]
pub struct ApiKeyConfig {
    /// Name of the request header carrying the API key
    #[arg(long = "api-key-header", env = "API_KEY_HEADER", default_value = "X-API-Key")]
    pub header: String,

    /// Expected API key value; empty disables enforcement
    #[arg(long = "api-key-value", env = "API_KEY_VALUE", default_value = "", hide_env_values = true)]
    pub value: String,
}
