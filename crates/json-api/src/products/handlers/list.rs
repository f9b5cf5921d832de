//! List Products Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    jsonapi::{ApiError, JsonApi, ListDocument, Resource},
    products::{errors::into_api_error, models::ProductAttributes},
    state::ProductsState,
};

#[salvo::handler]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<JsonApi<ListDocument<ProductAttributes>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<ProductsState>>()?;

    let records = state.products.list().await.map_err(into_api_error)?;

    Ok(JsonApi(ListDocument {
        data: records.iter().map(Resource::from).collect(),
        links: None,
        meta: None,
    }))
}
