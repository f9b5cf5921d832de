//! Update Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use stockline_app::domain::products::records::ProductId;

use crate::{
    extensions::*,
    jsonapi::{self, ApiError, Document, JsonApi, Links, Resource},
    products::{
        errors::into_api_error,
        models::{ProductAttributes, ProductPayloadAttributes},
    },
    state::ProductsState,
};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<JsonApi<Document<ProductAttributes>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<ProductsState>>()?;

    let id = req
        .param::<i64>("id")
        .ok_or_else(|| ApiError::bad_request("id must be an integer"))?;

    let body = jsonapi::parse_document::<ProductPayloadAttributes>(req).await?;
    let (name, price) = body.data.attributes.validated()?;

    let updated = state
        .products
        .update(ProductId::from_i64(id), name, price)
        .await
        .map_err(into_api_error)?;

    Ok(JsonApi(Document {
        data: Resource::from(&updated),
        links: Some(Links::self_only(format!("/products/{id}"))),
    }))
}
