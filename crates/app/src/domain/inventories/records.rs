//! Inventory records.

use jiff::Timestamp;

use crate::{domain::products::records::ProductId, ids::TypedId};

/// Inventory id, assigned by the store.
pub type InventoryId = TypedId<InventoryRecord>;

/// A stored stock record. At most one exists per product.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    pub id: InventoryId,
    pub product_id: ProductId,
    /// Never negative.
    pub quantity: i32,
    pub created_at: Timestamp,
    /// Absent until the first mutation.
    pub updated_at: Option<Timestamp>,
}
