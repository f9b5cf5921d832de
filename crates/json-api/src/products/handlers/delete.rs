//! Delete Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use stockline_app::domain::products::records::ProductId;

use crate::{
    extensions::*, jsonapi::ApiError, products::errors::into_api_error, state::ProductsState,
};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<ProductsState>>()?;

    let id = req
        .param::<i64>("id")
        .ok_or_else(|| ApiError::bad_request("id must be an integer"))?;

    state
        .products
        .delete(ProductId::from_i64(id))
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}
