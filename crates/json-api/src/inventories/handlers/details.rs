//! Inventory Details Handler
//!
//! Composes the local stock record with the remote product it tracks.

use std::sync::Arc;

use salvo::prelude::*;

use stockline_app::domain::products::records::ProductId;

use crate::{
    extensions::*,
    inventories::{errors::into_api_error, models::InventoryDetailsAttributes},
    jsonapi::{ApiError, Document, JsonApi, Links, Resource},
    state::InventoryState,
};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<JsonApi<Document<InventoryDetailsAttributes>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<InventoryState>>()?;

    let product_id = req
        .param::<i64>("product_id")
        .ok_or_else(|| ApiError::bad_request("productId must be an integer"))?;

    let details = state
        .inventories
        .get_details_by_product_id(ProductId::from_i64(product_id))
        .await
        .map_err(into_api_error)?;

    Ok(JsonApi(Document {
        data: Resource::from(&details),
        links: Some(Links::self_only(format!("/inventories/product/{product_id}"))),
    }))
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockline_app::{
        clients::products::{ProductSummary, ProductsLookupError},
        domain::inventories::{
            InventoriesServiceError, MockInventoriesService, data::InventoryDetails,
        },
    };

    use crate::test_helpers::{inventories_service, make_inventory};

    use super::*;

    fn make_service(inventories: MockInventoriesService) -> Service {
        inventories_service(
            inventories,
            Router::with_path("inventories")
                .push(Router::with_path("product/{product_id}").get(handler)),
        )
    }

    #[tokio::test]
    async fn test_details_success() -> TestResult {
        let mut inventories = MockInventoriesService::new();

        inventories
            .expect_get_details_by_product_id()
            .once()
            .withf(|product_id| *product_id == ProductId::from_i64(100))
            .return_once(|product_id| {
                Ok(InventoryDetails {
                    inventory: make_inventory(1, product_id.into_i64(), 7),
                    product: ProductSummary {
                        id: product_id,
                        name: "Keyboard".to_string(),
                        price: dec!(49.99),
                    },
                })
            });

        let mut res = TestClient::get("http://example.com/inventories/product/100")
            .send(&make_service(inventories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["data"]["attributes"]["quantity"], 7);
        assert_eq!(body["data"]["attributes"]["product"]["name"], "Keyboard");
        assert_eq!(body["links"]["self"], "/inventories/product/100");

        Ok(())
    }

    #[tokio::test]
    async fn test_details_missing_inventory_names_the_product() -> TestResult {
        let mut inventories = MockInventoriesService::new();

        inventories
            .expect_get_details_by_product_id()
            .once()
            .return_once(|product_id| {
                Err(InventoriesServiceError::NotFoundForProduct(product_id))
            });

        let mut res = TestClient::get("http://example.com/inventories/product/100")
            .send(&make_service(inventories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(
            body["errors"][0]["detail"],
            "Inventory not found for productId 100"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_details_remote_failure_returns_503() -> TestResult {
        let mut inventories = MockInventoriesService::new();

        inventories
            .expect_get_details_by_product_id()
            .once()
            .return_once(|_| {
                Err(InventoriesServiceError::Lookup(
                    ProductsLookupError::Unexpected("status 500".to_string()),
                ))
            });

        let mut res = TestClient::get("http://example.com/inventories/product/100")
            .send(&make_service(inventories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["errors"][0]["title"], "Service Unavailable");

        Ok(())
    }

    #[tokio::test]
    async fn test_details_disabled_integration_returns_500() -> TestResult {
        let mut inventories = MockInventoriesService::new();

        inventories
            .expect_get_details_by_product_id()
            .once()
            .return_once(|_| Err(InventoriesServiceError::IntegrationDisabled));

        let res = TestClient::get("http://example.com/inventories/product/100")
            .send(&make_service(inventories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
