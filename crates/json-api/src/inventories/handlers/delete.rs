//! Delete Inventory Handler

use std::sync::Arc;

use salvo::prelude::*;

use stockline_app::domain::inventories::records::InventoryId;

use crate::{
    extensions::*, inventories::errors::into_api_error, jsonapi::ApiError, state::InventoryState,
};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<InventoryState>>()?;

    let id = req
        .param::<i64>("id")
        .ok_or_else(|| ApiError::bad_request("id must be an integer"))?;

    state
        .inventories
        .delete(InventoryId::from_i64(id))
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use stockline_app::domain::inventories::MockInventoriesService;

    use crate::test_helpers::inventories_service;

    use super::*;

    fn make_service(inventories: MockInventoriesService) -> Service {
        inventories_service(
            inventories,
            Router::with_path("inventories").push(Router::with_path("{id}").delete(handler)),
        )
    }

    #[tokio::test]
    async fn test_delete_inventory_returns_204() -> TestResult {
        let mut inventories = MockInventoriesService::new();

        inventories
            .expect_delete()
            .once()
            .withf(|id| *id == InventoryId::from_i64(1))
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/inventories/1")
            .send(&make_service(inventories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_inventory_still_returns_204() -> TestResult {
        let mut inventories = MockInventoriesService::new();

        inventories.expect_delete().once().return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/inventories/999")
            .send(&make_service(inventories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }
}
