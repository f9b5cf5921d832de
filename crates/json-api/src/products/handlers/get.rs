//! Get Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use stockline_app::domain::products::records::ProductId;

use crate::{
    extensions::*,
    jsonapi::{ApiError, Document, JsonApi, Links, Resource},
    products::{errors::into_api_error, models::ProductAttributes},
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

    let record = state
        .products
        .get(ProductId::from_i64(id))
        .await
        .map_err(into_api_error)?;

    Ok(JsonApi(Document {
        data: Resource::from(&record),
        links: Some(Links::self_only(format!("/products/{id}"))),
    }))
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockline_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(
            products,
            Router::with_path("products").push(Router::with_path("{id}").get(handler)),
        )
    }

    #[tokio::test]
    async fn test_get_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get()
            .once()
            .withf(|id| *id == ProductId::from_i64(7))
            .return_once(|id| Ok(make_product(id.into_i64(), "Keyboard", dec!(49.99))));

        let mut res = TestClient::get("http://example.com/products/7")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["data"]["id"], "7");
        assert_eq!(body["data"]["attributes"]["name"], "Keyboard");
        assert_eq!(body["links"]["self"], "/products/7");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/products/9")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["errors"][0]["title"], "Not Found");
        assert_eq!(body["errors"][0]["detail"], "Product not found.");

        Ok(())
    }
}
