//! Inventory ledger domain.

pub mod data;
pub mod errors;
pub mod events;
pub mod records;
mod repository;
pub mod service;
pub mod store;

pub use errors::InventoriesServiceError;
pub use repository::PgInventoryStore;
pub use service::*;
pub use store::{InventoryStore, MockInventoryStore};
