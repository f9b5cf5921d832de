//! Get Inventory Handler

use std::sync::Arc;

use salvo::prelude::*;

use stockline_app::domain::inventories::records::InventoryId;

use crate::{
    extensions::*,
    inventories::{errors::into_api_error, models::InventoryAttributes},
    jsonapi::{ApiError, Document, JsonApi, Links, Resource},
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

    let record = state
        .inventories
        .get(InventoryId::from_i64(id))
        .await
        .map_err(into_api_error)?;

    Ok(JsonApi(Document {
        data: Resource::from(&record),
        links: Some(Links::self_only(format!("/inventories/{id}"))),
    }))
}
