//! Products service errors.

use thiserror::Error;

use crate::database::StoreError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("Product not found.")]
    NotFound,

    #[error("name must not be blank")]
    BlankName,

    #[error("price must be greater than 0")]
    InvalidPrice,

    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for ProductsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            // The check constraints mirror the service-level validations.
            StoreError::InvalidData => Self::InvalidPrice,
            other => Self::Store(other),
        }
    }
}
