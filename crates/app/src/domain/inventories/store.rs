//! Inventory store contract.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::StoreError,
    domain::{
        inventories::{
            data::NewInventory,
            records::{InventoryId, InventoryRecord},
        },
        products::records::ProductId,
    },
};

/// Key/CRUD persistence for stock records.
#[automock]
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Persist a new stock record; the store assigns the id. Fails with
    /// [`StoreError::AlreadyExists`] when the product already has one.
    async fn insert(
        &self,
        new: NewInventory,
        created_at: Timestamp,
    ) -> Result<InventoryRecord, StoreError>;

    async fn find(&self, id: InventoryId) -> Result<Option<InventoryRecord>, StoreError>;

    async fn find_by_product_id(
        &self,
        product_id: ProductId,
    ) -> Result<Option<InventoryRecord>, StoreError>;

    /// Overwrite the quantity and restamp `updated_at`. Returns `None` when
    /// no record with that id exists.
    async fn update_quantity(
        &self,
        id: InventoryId,
        quantity: i32,
        updated_at: Timestamp,
    ) -> Result<Option<InventoryRecord>, StoreError>;

    /// Atomically decrement the product's quantity by `units`, guarded by
    /// `quantity >= units` in the same statement. Returns `None` when no row
    /// matched — either the record is missing or stock is insufficient; the
    /// caller decides which.
    async fn decrement_quantity(
        &self,
        product_id: ProductId,
        units: i32,
        updated_at: Timestamp,
    ) -> Result<Option<InventoryRecord>, StoreError>;

    /// Delete by id; deleting an unknown id is not an error.
    async fn delete(&self, id: InventoryId) -> Result<(), StoreError>;

    async fn list(&self) -> Result<Vec<InventoryRecord>, StoreError>;

    async fn page(&self, limit: i64, offset: i64) -> Result<Vec<InventoryRecord>, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;
}
