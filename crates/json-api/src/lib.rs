//! Stockline HTTP layer.
//!
//! Two binaries share this crate: `stockline-products` serves the product
//! registry and `stockline-inventory` serves the stock ledger. Both mount the
//! same middleware stack, API-key check and resource-document envelope around
//! their own domain service from `stockline-app`.

pub mod auth;
pub mod config;
pub mod healthcheck;
pub mod jsonapi;
pub mod router;
pub mod shutdown;
pub mod state;

pub(crate) mod extensions;
pub(crate) mod inventories;
pub(crate) mod products;

#[cfg(test)]
mod test_helpers;
