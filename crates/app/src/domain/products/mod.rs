//! Products registry domain.

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;
pub mod store;

pub use errors::ProductsServiceError;
pub use repository::PgProductStore;
pub use service::*;
pub use store::{MockProductStore, ProductStore};
