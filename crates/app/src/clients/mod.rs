//! Remote service clients.

pub mod products;
