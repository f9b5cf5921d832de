//! Inventory data.

use crate::{
    clients::products::ProductSummary,
    domain::{inventories::records::InventoryRecord, products::records::ProductId},
};

/// New inventory data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInventory {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// One stock record paired with the remote product it tracks.
///
/// Composed on demand for detail lookups; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryDetails {
    pub inventory: InventoryRecord,
    pub product: ProductSummary,
}
