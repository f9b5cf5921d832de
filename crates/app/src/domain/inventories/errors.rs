//! Inventory service errors.

use thiserror::Error;

use crate::{
    clients::products::ProductsLookupError, database::StoreError,
    domain::products::records::ProductId,
};

#[derive(Debug, Error)]
pub enum InventoriesServiceError {
    #[error("Inventory not found.")]
    NotFound,

    #[error("Inventory not found for productId {0}")]
    NotFoundForProduct(ProductId),

    #[error("Inventory already exists for productId {0}")]
    AlreadyExists(ProductId),

    #[error("quantity must be >= 0")]
    InvalidQuantity,

    #[error("units must be > 0")]
    InvalidUnits,

    #[error("insufficient stock")]
    InsufficientStock,

    #[error("Product not found.")]
    ProductNotFound,

    /// The deployment has no Products lookup configured but a detail lookup
    /// was requested anyway.
    #[error("Products integration is disabled; products lookup not configured")]
    IntegrationDisabled,

    #[error("Products service error")]
    Lookup(#[source] ProductsLookupError),

    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for InventoriesServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            // The quantity check constraint is the only CHECK on the table.
            StoreError::InvalidData => Self::InvalidQuantity,
            other => Self::Store(other),
        }
    }
}
