//! Product records.

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Product id, assigned by the store.
pub type ProductId = TypedId<ProductRecord>;

/// A stored product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub created_at: Timestamp,
    /// Absent until the first update.
    pub updated_at: Option<Timestamp>,
}
