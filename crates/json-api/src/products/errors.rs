//! Product error mapping.

use tracing::error;

use stockline_app::domain::products::ProductsServiceError;

use crate::jsonapi::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::NotFound => ApiError::not_found(error.to_string()),
        ProductsServiceError::BlankName | ProductsServiceError::InvalidPrice => {
            ApiError::bad_request(error.to_string())
        }
        ProductsServiceError::Store(source) => {
            error!("product storage failure: {source}");

            ApiError::internal()
        }
    }
}
