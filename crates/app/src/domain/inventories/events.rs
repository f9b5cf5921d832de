//! Inventory change notifications.
//!
//! Every successful mutation emits one structured `InventoryChanged` log
//! record carrying the product id, the delta and the resulting quantity.

use tracing::info;

use crate::domain::products::records::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryChange {
    Created {
        product_id: ProductId,
        new_quantity: i32,
    },
    Updated {
        product_id: ProductId,
        new_quantity: i32,
    },
    Purchase {
        product_id: ProductId,
        units: i32,
        new_quantity: i32,
    },
}

impl InventoryChange {
    pub(crate) fn emit(&self) {
        match *self {
            Self::Created {
                product_id,
                new_quantity,
            } => {
                info!(
                    event = "CREATED",
                    product_id = %product_id,
                    new_quantity,
                    "InventoryChanged"
                );
            }
            Self::Updated {
                product_id,
                new_quantity,
            } => {
                info!(
                    event = "UPDATED",
                    product_id = %product_id,
                    new_quantity,
                    "InventoryChanged"
                );
            }
            Self::Purchase {
                product_id,
                units,
                new_quantity,
            } => {
                info!(
                    event = "PURCHASE",
                    product_id = %product_id,
                    delta = -units,
                    new_quantity,
                    "InventoryChanged"
                );
            }
        }
    }
}
