//! Inventory request and response models.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockline_app::domain::inventories::{data::InventoryDetails, records::InventoryRecord};

use crate::jsonapi::Resource;

pub(crate) const RESOURCE_KIND: &str = "inventories";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InventoryAttributes {
    pub product_id: i64,
    pub quantity: i32,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl From<&InventoryRecord> for Resource<InventoryAttributes> {
    fn from(record: &InventoryRecord) -> Self {
        Resource {
            kind: RESOURCE_KIND.to_string(),
            id: record.id.to_string(),
            attributes: InventoryAttributes {
                product_id: record.product_id.into_i64(),
                quantity: record.quantity,
                created_at: record.created_at,
                updated_at: record.updated_at,
            },
        }
    }
}

/// The remote product nested inside a details response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductSummaryAttributes {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InventoryDetailsAttributes {
    pub product_id: i64,
    pub quantity: i32,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    pub product: ProductSummaryAttributes,
}

impl From<&InventoryDetails> for Resource<InventoryDetailsAttributes> {
    fn from(details: &InventoryDetails) -> Self {
        Resource {
            kind: RESOURCE_KIND.to_string(),
            id: details.inventory.id.to_string(),
            attributes: InventoryDetailsAttributes {
                product_id: details.inventory.product_id.into_i64(),
                quantity: details.inventory.quantity,
                created_at: details.inventory.created_at,
                updated_at: details.inventory.updated_at,
                product: ProductSummaryAttributes {
                    id: details.product.id.into_i64(),
                    name: details.product.name.clone(),
                    price: details.product.price,
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateInventoryAttributes {
    pub product_id: Option<i64>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateInventoryAttributes {
    pub quantity: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchaseAttributes {
    pub product_id: Option<i64>,
    pub units: Option<i32>,
}
