//! Purchase Handler
//!
//! Deducts purchased units from a product's stock. Insufficient stock is a
//! business-rule violation, reported as a 400, never a conflict.

use std::sync::Arc;

use salvo::prelude::*;

use stockline_app::domain::products::records::ProductId;

use crate::{
    extensions::*,
    inventories::{
        errors::into_api_error,
        models::{InventoryAttributes, PurchaseAttributes},
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

    let body = jsonapi::parse_document::<PurchaseAttributes>(req).await?;
    let attributes = body.data.attributes;

    let Some(product_id) = attributes.product_id else {
        return Err(ApiError::validation("productId: must not be null"));
    };

    let Some(units) = attributes.units else {
        return Err(ApiError::validation("units: must not be null"));
    };

    if units < 1 {
        return Err(ApiError::validation(
            "units: must be greater than or equal to 1",
        ));
    }

    let record = state
        .inventories
        .purchase(ProductId::from_i64(product_id), units)
        .await
        .map_err(into_api_error)?;

    Ok(JsonApi(Document {
        data: Resource::from(&record),
        links: Some(Links::self_only(format!(
            "/inventories/product/{product_id}"
        ))),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use stockline_app::domain::inventories::{InventoriesServiceError, MockInventoriesService};

    use crate::test_helpers::{inventories_service, make_inventory};

    use super::*;

    fn make_service(inventories: MockInventoriesService) -> Service {
        inventories_service(
            inventories,
            Router::with_path("inventories").push(Router::with_path("purchase").post(handler)),
        )
    }

    #[tokio::test]
    async fn test_purchase_success() -> TestResult {
        let mut inventories = MockInventoriesService::new();

        inventories
            .expect_purchase()
            .once()
            .withf(|product_id, units| *product_id == ProductId::from_i64(100) && *units == 3)
            .return_once(|product_id, _| Ok(make_inventory(1, product_id.into_i64(), 7)));

        let mut res = TestClient::post("http://example.com/inventories/purchase")
            .json(&json!({ "data": { "attributes": { "productId": 100, "units": 3 } } }))
            .send(&make_service(inventories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["data"]["attributes"]["quantity"], 7);
        assert_eq!(body["links"]["self"], "/inventories/product/100");

        Ok(())
    }

    #[tokio::test]
    async fn test_purchase_insufficient_stock_returns_400() -> TestResult {
        let mut inventories = MockInventoriesService::new();

        inventories
            .expect_purchase()
            .once()
            .return_once(|_, _| Err(InventoriesServiceError::InsufficientStock));

        let mut res = TestClient::post("http://example.com/inventories/purchase")
            .json(&json!({ "data": { "attributes": { "productId": 100, "units": 100 } } }))
            .send(&make_service(inventories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["errors"][0]["title"], "Bad Request");
        assert_eq!(body["errors"][0]["detail"], "insufficient stock");

        Ok(())
    }

    #[tokio::test]
    async fn test_purchase_zero_units_returns_validation_error() -> TestResult {
        let mut inventories = MockInventoriesService::new();

        inventories.expect_purchase().never();

        let mut res = TestClient::post("http://example.com/inventories/purchase")
            .json(&json!({ "data": { "attributes": { "productId": 100, "units": 0 } } }))
            .send(&make_service(inventories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(
            body["errors"][0]["detail"],
            "units: must be greater than or equal to 1"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_purchase_missing_units_returns_validation_error() -> TestResult {
        let mut inventories = MockInventoriesService::new();

        inventories.expect_purchase().never();

        let mut res = TestClient::post("http://example.com/inventories/purchase")
            .json(&json!({ "data": { "attributes": { "productId": 100 } } }))
            .send(&make_service(inventories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["errors"][0]["detail"], "units: must not be null");

        Ok(())
    }

    #[tokio::test]
    async fn test_purchase_unknown_product_returns_404() -> TestResult {
        let mut inventories = MockInventoriesService::new();

        inventories
            .expect_purchase()
            .once()
            .return_once(|product_id, _| {
                Err(InventoriesServiceError::NotFoundForProduct(product_id))
            });

        let res = TestClient::post("http://example.com/inventories/purchase")
            .json(&json!({ "data": { "attributes": { "productId": 100, "units": 3 } } }))
            .send(&make_service(inventories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
