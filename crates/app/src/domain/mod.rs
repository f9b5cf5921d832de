//! Domain modules.

pub mod inventories;
pub mod pagination;
pub mod products;
