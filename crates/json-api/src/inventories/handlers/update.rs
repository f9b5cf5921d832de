//! Update Inventory Handler

use std::sync::Arc;

use salvo::prelude::*;

use stockline_app::domain::inventories::records::InventoryId;

use crate::{
    extensions::*,
    inventories::{
        errors::into_api_error,
        models::{InventoryAttributes, UpdateInventoryAttributes},
    },
    jsonapi::{self, ApiError, Document, JsonApi, Links, Resource},
    state::InventoryState,
};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<JsonApi<Document<InventoryAttributes>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<InventoryState>>()?;

    let id = req
        .param::<i64>("id")
        .ok_or_else(|| ApiError::bad_request("id must be an integer"))?;

    let body = jsonapi::parse_document::<UpdateInventoryAttributes>(req).await?;
    let quantity = body.data.attributes.quantity;

    if quantity.is_some_and(|quantity| quantity < 0) {
        return Err(ApiError::validation(
            "quantity: must be greater than or equal to 0",
        ));
    }

    let updated = state
        .inventories
        .update(InventoryId::from_i64(id), quantity)
        .await
        .map_err(into_api_error)?;

    Ok(JsonApi(Document {
        data: Resource::from(&updated),
        links: Some(Links::self_only(format!("/inventories/{id}"))),
    }))
}
