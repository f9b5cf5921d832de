//! Remote Products lookup client.
//!
//! The Inventory service uses this to validate product ids on create and to
//! enrich detail lookups. Each call is one attempt — no retries, no caching;
//! an unreachable Products service fails the surrounding request.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode, header::ACCEPT};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::domain::products::records::ProductId;

/// Media types accepted from the Products service.
const ACCEPT_VALUE: &str = "application/vnd.api+json, application/json";

/// Read-only projection of a remote product. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Error)]
pub enum ProductsLookupError {
    #[error("Product not found.")]
    NotFound,

    #[error("error calling Products service")]
    Http(#[from] reqwest::Error),

    /// Non-success status, empty body or malformed/incomplete payload.
    #[error("Products service unexpected response: {0}")]
    Unexpected(String),
}

/// Remote product lookup.
#[automock]
#[async_trait]
pub trait ProductsLookup: Send + Sync {
    /// Fetch the remote product by id.
    async fn get_product_summary(
        &self,
        product_id: ProductId,
    ) -> Result<ProductSummary, ProductsLookupError>;

    /// Existence check used by inventory create. Unknown failures are
    /// conservatively treated as "does not exist" rather than propagated.
    async fn exists_product(&self, product_id: ProductId) -> bool {
        match self.get_product_summary(product_id).await {
            Ok(_) => true,
            Err(ProductsLookupError::NotFound) => false,
            Err(error) => {
                warn!("products lookup failed for productId {product_id}: {error}");

                false
            }
        }
    }
}

/// Configuration for the REST lookup client.
#[derive(Debug, Clone)]
pub struct ProductsLookupConfig {
    /// Products service base URL, e.g. `"http://localhost:8081"`.
    pub base_url: String,

    /// Name of the shared-secret header sent with every call.
    pub api_key_header: String,

    /// Shared-secret value sourced from configuration.
    pub api_key_value: String,
}

/// HTTP implementation of [`ProductsLookup`] over the Products service's
/// JSON:API surface.
#[derive(Debug, Clone)]
pub struct RestProductsLookup {
    config: ProductsLookupConfig,
    http: Client,
}

impl RestProductsLookup {
    #[must_use]
    pub fn new(config: ProductsLookupConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl ProductsLookup for RestProductsLookup {
    async fn get_product_summary(
        &self,
        product_id: ProductId,
    ) -> Result<ProductSummary, ProductsLookupError> {
        let url = format!(
            "{}/products/{product_id}",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, ACCEPT_VALUE)
            .header(&self.config.api_key_header, &self.config.api_key_value)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ProductsLookupError::NotFound);
        }

        if !response.status().is_success() {
            return Err(ProductsLookupError::Unexpected(format!(
                "status {} from {url}",
                response.status()
            )));
        }

        let document: SummaryDocument = response.json().await?;

        parse_summary(document)
    }
}

#[derive(Debug, Deserialize)]
struct SummaryDocument {
    data: Option<SummaryResource>,
}

#[derive(Debug, Deserialize)]
struct SummaryResource {
    id: Option<String>,
    #[serde(default)]
    attributes: SummaryAttributes,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryAttributes {
    name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    price: Option<Decimal>,
}

/// Validate a decoded resource document into a [`ProductSummary`].
///
/// The primary resource id arrives as a JSON:API string and must parse as an
/// integer; name and price must both be present.
fn parse_summary(document: SummaryDocument) -> Result<ProductSummary, ProductsLookupError> {
    let Some(resource) = document.data else {
        return Err(ProductsLookupError::Unexpected(
            "missing primary resource".to_string(),
        ));
    };

    let id = resource
        .id
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or_else(|| {
            ProductsLookupError::Unexpected("missing or non-numeric resource id".to_string())
        })?;

    let Some(name) = resource.attributes.name else {
        return Err(ProductsLookupError::Unexpected(
            "incomplete product payload: missing name".to_string(),
        ));
    };

    let Some(price) = resource.attributes.price else {
        return Err(ProductsLookupError::Unexpected(
            "incomplete product payload: missing price".to_string(),
        ));
    };

    Ok(ProductSummary {
        id: ProductId::from_i64(id),
        name,
        price,
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn decode(value: serde_json::Value) -> SummaryDocument {
        serde_json::from_value(value).unwrap_or(SummaryDocument { data: None })
    }

    #[test]
    fn parses_complete_resource_document() -> TestResult {
        let document = decode(json!({
            "data": {
                "type": "products",
                "id": "7",
                "attributes": { "name": "Keyboard", "price": 49.99 }
            }
        }));

        let summary = parse_summary(document)?;

        assert_eq!(summary.id, ProductId::from_i64(7));
        assert_eq!(summary.name, "Keyboard");
        assert_eq!(summary.price, dec!(49.99));

        Ok(())
    }

    #[test]
    fn missing_data_is_unexpected() {
        let result = parse_summary(decode(json!({ "meta": {} })));

        assert!(
            matches!(result, Err(ProductsLookupError::Unexpected(_))),
            "expected Unexpected, got {result:?}"
        );
    }

    #[test]
    fn non_numeric_id_is_unexpected() {
        let document = decode(json!({
            "data": {
                "id": "not-a-number",
                "attributes": { "name": "Keyboard", "price": 1 }
            }
        }));

        let result = parse_summary(document);

        assert!(
            matches!(result, Err(ProductsLookupError::Unexpected(_))),
            "expected Unexpected, got {result:?}"
        );
    }

    #[test]
    fn missing_price_is_unexpected() {
        let document = decode(json!({
            "data": { "id": "7", "attributes": { "name": "Keyboard" } }
        }));

        let result = parse_summary(document);

        assert!(
            matches!(result, Err(ProductsLookupError::Unexpected(_))),
            "expected Unexpected, got {result:?}"
        );
    }

    #[test]
    fn price_is_parsed_without_precision_loss() -> TestResult {
        let raw = r#"{"data":{"id":"1","attributes":{"name":"Scale","price":0.1234567890123456789}}}"#;

        let document: SummaryDocument = serde_json::from_str(raw)?;
        let summary = parse_summary(document)?;

        assert_eq!(summary.price.to_string(), "0.1234567890123456789");

        Ok(())
    }

    struct FlakyLookup;

    #[async_trait]
    impl ProductsLookup for FlakyLookup {
        async fn get_product_summary(
            &self,
            _product_id: ProductId,
        ) -> Result<ProductSummary, ProductsLookupError> {
            Err(ProductsLookupError::Unexpected("boom".to_string()))
        }
    }

    struct MissingLookup;

    #[async_trait]
    impl ProductsLookup for MissingLookup {
        async fn get_product_summary(
            &self,
            _product_id: ProductId,
        ) -> Result<ProductSummary, ProductsLookupError> {
            Err(ProductsLookupError::NotFound)
        }
    }

    #[tokio::test]
    async fn exists_product_treats_unknown_failures_as_absent() {
        assert!(!FlakyLookup.exists_product(ProductId::from_i64(1)).await);
    }

    #[tokio::test]
    async fn exists_product_maps_not_found_to_false() {
        assert!(!MissingLookup.exists_product(ProductId::from_i64(1)).await);
    }
}
