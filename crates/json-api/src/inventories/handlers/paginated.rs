//! Paginated Inventories Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    inventories::{errors::into_api_error, models::InventoryAttributes},
    jsonapi::{ApiError, JsonApi, Links, ListDocument, PageMeta, Resource},
    state::InventoryState,
};

const DEFAULT_PAGE_NUMBER: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<JsonApi<ListDocument<InventoryAttributes>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<InventoryState>>()?;

    let page_number = req.query::<i64>("pageNumber").unwrap_or(DEFAULT_PAGE_NUMBER);
    let page_size = req.query::<i64>("pageSize").unwrap_or(DEFAULT_PAGE_SIZE);

    let page = state
        .inventories
        .paginated_list(page_number, page_size)
        .await
        .map_err(into_api_error)?;

    let meta = PageMeta::from_page(&page);
    let links = Links::paginated(
        "/inventories/paginated",
        &meta,
        page.has_next(),
        page.has_previous(),
    );

    Ok(JsonApi(ListDocument {
        data: page.items.iter().map(Resource::from).collect(),
        links: Some(links),
        meta: Some(meta),
    }))
}
