//! List Inventories Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    inventories::{errors::into_api_error, models::InventoryAttributes},
    jsonapi::{ApiError, JsonApi, ListDocument, Resource},
    state::InventoryState,
};

#[salvo::handler]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<JsonApi<ListDocument<InventoryAttributes>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<InventoryState>>()?;

    let records = state.inventories.list().await.map_err(into_api_error)?;

    Ok(JsonApi(ListDocument {
        data: records.iter().map(Resource::from).collect(),
        links: None,
        meta: None,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockline_app::domain::inventories::MockInventoriesService;

    use crate::test_helpers::{inventories_service, make_inventory};

    use super::*;

    fn make_service(inventories: MockInventoriesService) -> Service {
        inventories_service(
            inventories,
            Router::with_path("inventories").push(Router::with_path("list").get(handler)),
        )
    }

    #[tokio::test]
    async fn test_list_inventories() -> TestResult {
        let mut inventories = MockInventoriesService::new();

        inventories
            .expect_list()
            .once()
            .return_once(|| Ok(vec![make_inventory(1, 100, 10), make_inventory(2, 200, 0)]));

        let mut res = TestClient::get("http://example.com/inventories/list")
            .send(&make_service(inventories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["data"][1]["attributes"]["productId"], 200);
        assert!(body.get("meta").is_none(), "plain list carries no meta");

        Ok(())
    }

    #[tokio::test]
    async fn test_list_empty() -> TestResult {
        let mut inventories = MockInventoriesService::new();

        inventories.expect_list().once().return_once(|| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/inventories/list")
            .send(&make_service(inventories))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["data"].as_array().map(Vec::len), Some(0));

        Ok(())
    }
}
