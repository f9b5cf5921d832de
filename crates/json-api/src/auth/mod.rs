//! API-key authentication.

pub mod middleware;

/// Principal name assigned to every request that passes the key check.
pub const API_KEY_USER: &str = "api-key-user";

/// The authenticated caller for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub name: String,
}

impl Principal {
    #[must_use]
    pub fn api_key_user() -> Self {
        Self {
            name: API_KEY_USER.to_string(),
        }
    }
}
