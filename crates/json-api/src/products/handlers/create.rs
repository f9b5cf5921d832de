//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

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
    res: &mut Response,
) -> Result<JsonApi<Document<ProductAttributes>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<ProductsState>>()?;

    let body = jsonapi::parse_document::<ProductPayloadAttributes>(req).await?;
    let (name, price) = body.data.attributes.validated()?;

    let created = state
        .products
        .create(name, price)
        .await
        .map_err(into_api_error)?;

    let location = format!("/products/{}", created.id);

    res.add_header(LOCATION, location.as_str(), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(JsonApi(Document {
        data: Resource::from(&created),
        links: Some(Links::self_only(location)),
    }))
}
