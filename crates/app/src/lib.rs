//! Shared domain logic and persistence for the Stockline services.
//!
//! The Products registry and the Inventory ledger both build their domain
//! services from this crate; the HTTP layer lives in `stockline-json`.

pub mod clients;
pub mod context;
pub mod database;
pub mod domain;
pub mod ids;

#[cfg(test)]
mod test;
