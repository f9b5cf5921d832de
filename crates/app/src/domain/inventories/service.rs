//! Inventory service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    clients::products::{ProductsLookup, ProductsLookupError},
    database::StoreError,
    domain::{
        inventories::{
            data::{InventoryDetails, NewInventory},
            errors::InventoriesServiceError,
            events::InventoryChange,
            records::{InventoryId, InventoryRecord},
            store::InventoryStore,
        },
        pagination::{Page, PageRequest},
        products::records::ProductId,
    },
};

/// Stock ledger backed by an [`InventoryStore`], optionally validating
/// product ids against a remote [`ProductsLookup`].
///
/// When no lookup is configured the service runs standalone: creates skip
/// product validation and detail lookups are rejected.
#[derive(Clone)]
pub struct StoreInventoriesService {
    store: Arc<dyn InventoryStore>,
    products: Option<Arc<dyn ProductsLookup>>,
}

impl StoreInventoriesService {
    #[must_use]
    pub fn new(store: Arc<dyn InventoryStore>, products: Option<Arc<dyn ProductsLookup>>) -> Self {
        Self { store, products }
    }
}

#[async_trait]
impl InventoriesService for StoreInventoriesService {
    async fn create(
        &self,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<InventoryRecord, InventoriesServiceError> {
        if quantity < 0 {
            return Err(InventoriesServiceError::InvalidQuantity);
        }

        if let Some(products) = &self.products
            && !products.exists_product(product_id).await
        {
            return Err(InventoriesServiceError::ProductNotFound);
        }

        let created = self
            .store
            .insert(
                NewInventory {
                    product_id,
                    quantity,
                },
                Timestamp::now(),
            )
            .await
            .map_err(|error| match error {
                StoreError::AlreadyExists => InventoriesServiceError::AlreadyExists(product_id),
                other => other.into(),
            })?;

        InventoryChange::Created {
            product_id,
            new_quantity: created.quantity,
        }
        .emit();

        Ok(created)
    }

    async fn get(&self, id: InventoryId) -> Result<InventoryRecord, InventoriesServiceError> {
        self.store
            .find(id)
            .await?
            .ok_or(InventoriesServiceError::NotFound)
    }

    async fn get_by_product_id(
        &self,
        product_id: ProductId,
    ) -> Result<InventoryRecord, InventoriesServiceError> {
        self.store
            .find_by_product_id(product_id)
            .await?
            .ok_or(InventoriesServiceError::NotFoundForProduct(product_id))
    }

    async fn update(
        &self,
        id: InventoryId,
        quantity: Option<i32>,
    ) -> Result<InventoryRecord, InventoriesServiceError> {
        if let Some(quantity) = quantity
            && quantity < 0
        {
            return Err(InventoriesServiceError::InvalidQuantity);
        }

        let current = self
            .store
            .find(id)
            .await?
            .ok_or(InventoriesServiceError::NotFound)?;

        // An omitted quantity keeps the current one but still restamps.
        let new_quantity = quantity.unwrap_or(current.quantity);

        let updated = self
            .store
            .update_quantity(id, new_quantity, Timestamp::now())
            .await?
            .ok_or(InventoriesServiceError::NotFound)?;

        InventoryChange::Updated {
            product_id: updated.product_id,
            new_quantity: updated.quantity,
        }
        .emit();

        Ok(updated)
    }

    async fn purchase(
        &self,
        product_id: ProductId,
        units: i32,
    ) -> Result<InventoryRecord, InventoriesServiceError> {
        if units <= 0 {
            return Err(InventoriesServiceError::InvalidUnits);
        }

        let decremented = self
            .store
            .decrement_quantity(product_id, units, Timestamp::now())
            .await?;

        match decremented {
            Some(record) => {
                InventoryChange::Purchase {
                    product_id,
                    units,
                    new_quantity: record.quantity,
                }
                .emit();

                Ok(record)
            }
            // No row matched: tell apart a missing record from a guarded
            // decrement that found too little stock.
            None => match self.store.find_by_product_id(product_id).await? {
                Some(_) => Err(InventoriesServiceError::InsufficientStock),
                None => Err(InventoriesServiceError::NotFoundForProduct(product_id)),
            },
        }
    }

    async fn delete(&self, id: InventoryId) -> Result<(), InventoriesServiceError> {
        self.store.delete(id).await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<InventoryRecord>, InventoriesServiceError> {
        Ok(self.store.list().await?)
    }

    async fn paginated_list(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<Page<InventoryRecord>, InventoriesServiceError> {
        let request = PageRequest::clamped(page_number, page_size);

        let items = self.store.page(request.limit(), request.offset()).await?;
        let total = self.store.count().await?;

        Ok(Page::new(items, total.max(0).unsigned_abs(), request))
    }

    async fn get_details_by_product_id(
        &self,
        product_id: ProductId,
    ) -> Result<InventoryDetails, InventoriesServiceError> {
        let Some(products) = &self.products else {
            return Err(InventoriesServiceError::IntegrationDisabled);
        };

        // Remote product first; a missing product hides any local record.
        let product = products
            .get_product_summary(product_id)
            .await
            .map_err(|error| match error {
                ProductsLookupError::NotFound => InventoriesServiceError::ProductNotFound,
                other => InventoriesServiceError::Lookup(other),
            })?;

        let inventory = self.get_by_product_id(product_id).await?;

        Ok(InventoryDetails { inventory, product })
    }
}

#[automock]
#[async_trait]
pub trait InventoriesService: Send + Sync {
    /// Create a stock record for a product. One record per product; the
    /// initial quantity must be zero or more.
    async fn create(
        &self,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<InventoryRecord, InventoriesServiceError>;

    /// Retrieve a single stock record by its own id.
    async fn get(&self, id: InventoryId) -> Result<InventoryRecord, InventoriesServiceError>;

    /// Retrieve the stock record tracking a product.
    async fn get_by_product_id(
        &self,
        product_id: ProductId,
    ) -> Result<InventoryRecord, InventoriesServiceError>;

    /// Overwrite the quantity; omitting it keeps the current quantity but
    /// still restamps `updated_at`.
    async fn update(
        &self,
        id: InventoryId,
        quantity: Option<i32>,
    ) -> Result<InventoryRecord, InventoriesServiceError>;

    /// Deduct purchased units from a product's stock, refusing to go
    /// negative.
    async fn purchase(
        &self,
        product_id: ProductId,
        units: i32,
    ) -> Result<InventoryRecord, InventoriesServiceError>;

    /// Delete a stock record. Deleting an unknown id is not an error.
    async fn delete(&self, id: InventoryId) -> Result<(), InventoriesServiceError>;

    /// Retrieve all stock records, unordered.
    async fn list(&self) -> Result<Vec<InventoryRecord>, InventoriesServiceError>;

    /// Retrieve one page of stock records with totals.
    async fn paginated_list(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<Page<InventoryRecord>, InventoriesServiceError>;

    /// Retrieve a stock record together with the remote product it tracks.
    async fn get_details_by_product_id(
        &self,
        product_id: ProductId,
    ) -> Result<InventoryDetails, InventoriesServiceError>;
}
