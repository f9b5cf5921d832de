//! Create Inventory Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use stockline_app::domain::products::records::ProductId;

use crate::{
    extensions::*,
    inventories::{
        errors::into_api_error,
        models::{CreateInventoryAttributes, InventoryAttributes},
    },
    jsonapi::{self, ApiError, Document, JsonApi, Links, Resource},
    state::InventoryState,
};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<JsonApi<Document<InventoryAttributes>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<InventoryState>>()?;

    let body = jsonapi::parse_document::<CreateInventoryAttributes>(req).await?;
    let attributes = body.data.attributes;

    let Some(product_id) = attributes.product_id else {
        return Err(ApiError::validation("productId: must not be null"));
    };

    let Some(quantity) = attributes.quantity else {
        return Err(ApiError::validation("quantity: must not be null"));
    };

    if quantity < 0 {
        return Err(ApiError::validation(
            "quantity: must be greater than or equal to 0",
        ));
    }

    let created = state
        .inventories
        .create(ProductId::from_i64(product_id), quantity)
        .await
        .map_err(into_api_error)?;

    let location = format!("/inventories/{}", created.id);

    res.add_header(LOCATION, location.as_str(), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(JsonApi(Document {
        data: Resource::from(&created),
        links: Some(Links::self_only(location)),
    }))
}
