//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rust_decimal::Decimal;

use crate::domain::{
    pagination::{Page, PageRequest},
    products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        store::ProductStore,
    },
};

/// Products CRUD backed by a [`ProductStore`].
#[derive(Clone)]
pub struct StoreProductsService {
    store: Arc<dyn ProductStore>,
}

impl StoreProductsService {
    #[must_use]
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    fn validate(name: &str, price: Decimal) -> Result<(), ProductsServiceError> {
        if name.trim().is_empty() {
            return Err(ProductsServiceError::BlankName);
        }

        if price <= Decimal::ZERO {
            return Err(ProductsServiceError::InvalidPrice);
        }

        Ok(())
    }
}

#[async_trait]
impl ProductsService for StoreProductsService {
    async fn create(
        &self,
        name: String,
        price: Decimal,
    ) -> Result<ProductRecord, ProductsServiceError> {
        Self::validate(&name, price)?;

        let created = self
            .store
            .insert(NewProduct { name, price }, Timestamp::now())
            .await?;

        Ok(created)
    }

    async fn get(&self, id: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        self.store
            .find(id)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn update(
        &self,
        id: ProductId,
        name: String,
        price: Decimal,
    ) -> Result<ProductRecord, ProductsServiceError> {
        Self::validate(&name, price)?;

        self.store
            .update(id, ProductUpdate { name, price }, Timestamp::now())
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn delete(&self, id: ProductId) -> Result<(), ProductsServiceError> {
        self.store.delete(id).await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.store.list().await?)
    }

    async fn paginated_list(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<Page<ProductRecord>, ProductsServiceError> {
        let request = PageRequest::clamped(page_number, page_size);

        let items = self.store.page(request.limit(), request.offset()).await?;
        let total = self.store.count().await?;

        Ok(Page::new(items, total.max(0).unsigned_abs(), request))
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Create a product with a non-blank name and a positive price.
    async fn create(
        &self,
        name: String,
        price: Decimal,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get(&self, id: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Replace a product's name and price.
    async fn update(
        &self,
        id: ProductId,
        name: String,
        price: Decimal,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Delete a product. Deleting an unknown id is not an error.
    async fn delete(&self, id: ProductId) -> Result<(), ProductsServiceError>;

    /// Retrieve all products, unordered.
    async fn list(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve one page of products with totals.
    async fn paginated_list(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<Page<ProductRecord>, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use testresult::TestResult;

    use crate::domain::products::store::MockProductStore;

    use super::*;

    fn make_record(id: i64, name: &str, price: Decimal) -> ProductRecord {
        ProductRecord {
            id: ProductId::from_i64(id),
            name: name.to_string(),
            price,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: None,
        }
    }

    fn service(store: MockProductStore) -> StoreProductsService {
        StoreProductsService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn create_persists_name_and_price() -> TestResult {
        let mut store = MockProductStore::new();

        store
            .expect_insert()
            .once()
            .withf(|new, _| new.name == "Keyboard" && new.price == dec!(49.99))
            .return_once(|new, _| Ok(make_record(1, &new.name, new.price)));

        let created = service(store).create("Keyboard".to_string(), dec!(49.99)).await?;

        assert_eq!(created.id, ProductId::from_i64(1));
        assert_eq!(created.price, dec!(49.99));

        Ok(())
    }

    #[tokio::test]
    async fn create_blank_name_fails_before_store_write() {
        let mut store = MockProductStore::new();

        store.expect_insert().never();

        let result = service(store).create("   ".to_string(), dec!(10)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::BlankName)),
            "expected BlankName, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_non_positive_price_fails_before_store_write() {
        let mut store = MockProductStore::new();

        store.expect_insert().never();

        let result = service(store).create("Keyboard".to_string(), dec!(0)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidPrice)),
            "expected InvalidPrice, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_unknown_id_returns_not_found() {
        let mut store = MockProductStore::new();

        store.expect_find().once().return_once(|_| Ok(None));

        let result = service(store).get(ProductId::from_i64(7)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_replaces_name_and_price() -> TestResult {
        let mut store = MockProductStore::new();

        store
            .expect_update()
            .once()
            .withf(|id, update, _| {
                *id == ProductId::from_i64(3)
                    && update.name == "Mouse"
                    && update.price == dec!(19.90)
            })
            .return_once(|id, update, updated_at| {
                let mut record = make_record(id.into_i64(), &update.name, update.price);
                record.updated_at = Some(updated_at);
                Ok(Some(record))
            });

        let updated = service(store)
            .update(ProductId::from_i64(3), "Mouse".to_string(), dec!(19.90))
            .await?;

        assert_eq!(updated.name, "Mouse");
        assert!(updated.updated_at.is_some(), "updated_at should be restamped");

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_returns_not_found() {
        let mut store = MockProductStore::new();

        store.expect_update().once().return_once(|_, _, _| Ok(None));

        let result = service(store)
            .update(ProductId::from_i64(9), "Mouse".to_string(), dec!(5))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_delegates_without_existence_check() -> TestResult {
        let mut store = MockProductStore::new();

        store
            .expect_delete()
            .once()
            .withf(|id| *id == ProductId::from_i64(42))
            .return_once(|_| Ok(()));
        store.expect_find().never();

        service(store).delete(ProductId::from_i64(42)).await?;

        Ok(())
    }

    #[tokio::test]
    async fn paginated_list_clamps_page_size() -> TestResult {
        let mut store = MockProductStore::new();

        store
            .expect_page()
            .once()
            .withf(|limit, offset| *limit == 100 && *offset == 0)
            .return_once(|_, _| Ok(vec![]));
        store.expect_count().once().return_once(|| Ok(250));

        let page = service(store).paginated_list(0, 500).await?;

        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, 100);
        assert_eq!(page.total_elements, 250);
        assert_eq!(page.total_pages, 3);

        Ok(())
    }
}
