//! Product store contract.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::StoreError,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        records::{ProductId, ProductRecord},
    },
};

/// Key/CRUD persistence for product records.
#[automock]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new product; the store assigns the id.
    async fn insert(
        &self,
        new: NewProduct,
        created_at: Timestamp,
    ) -> Result<ProductRecord, StoreError>;

    async fn find(&self, id: ProductId) -> Result<Option<ProductRecord>, StoreError>;

    /// Replace name and price, restamping `updated_at`. Returns `None` when
    /// no record with that id exists.
    async fn update(
        &self,
        id: ProductId,
        update: ProductUpdate,
        updated_at: Timestamp,
    ) -> Result<Option<ProductRecord>, StoreError>;

    async fn delete(&self, id: ProductId) -> Result<(), StoreError>;

    async fn list(&self) -> Result<Vec<ProductRecord>, StoreError>;

    async fn page(&self, limit: i64, offset: i64) -> Result<Vec<ProductRecord>, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;
}
