//! Product request and response models.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockline_app::domain::products::records::ProductRecord;

use crate::jsonapi::Resource;

pub(crate) const RESOURCE_KIND: &str = "products";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductAttributes {
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl From<&ProductRecord> for Resource<ProductAttributes> {
    fn from(record: &ProductRecord) -> Self {
        Resource {
            kind: RESOURCE_KIND.to_string(),
            id: record.id.to_string(),
            attributes: ProductAttributes {
                name: record.name.clone(),
                price: record.price,
                created_at: record.created_at,
                updated_at: record.updated_at,
            },
        }
    }
}

/// Shared by create and update; both replace name and price wholesale.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductPayloadAttributes {
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub price: Option<Decimal>,
}

impl ProductPayloadAttributes {
    /// First-failing-field validation, mirrored by the domain service.
    pub(crate) fn validated(self) -> Result<(String, Decimal), crate::jsonapi::ApiError> {
        use crate::jsonapi::ApiError;

        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ApiError::validation("name: must not be blank")),
        };

        let Some(price) = self.price else {
            return Err(ApiError::validation("price: must not be null"));
        };

        if price <= Decimal::ZERO {
            return Err(ApiError::validation("price: must be greater than 0"));
        }

        Ok((name, price))
    }
}
