//! Inventory error mapping.

use tracing::error;

use stockline_app::domain::inventories::InventoriesServiceError;

use crate::jsonapi::ApiError;

pub(crate) fn into_api_error(error: InventoriesServiceError) -> ApiError {
    match error {
        InventoriesServiceError::NotFound
        | InventoriesServiceError::NotFoundForProduct(_)
        | InventoriesServiceError::ProductNotFound => ApiError::not_found(error.to_string()),
        InventoriesServiceError::InvalidQuantity
        | InventoriesServiceError::InvalidUnits
        | InventoriesServiceError::InsufficientStock => ApiError::bad_request(error.to_string()),
        InventoriesServiceError::AlreadyExists(_) => ApiError::conflict(error.to_string()),
        InventoriesServiceError::IntegrationDisabled => {
            error!("details requested but no products lookup is configured");

            ApiError::internal()
        }
        InventoriesServiceError::Lookup(source) => {
            error!("products lookup failed: {source}");

            ApiError::service_unavailable("Products service unavailable")
        }
        InventoriesServiceError::Store(source) => {
            error!("inventory storage failure: {source}");

            ApiError::internal()
        }
    }
}
