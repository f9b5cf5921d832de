//! Inventory Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod details;
pub(crate) mod get;
pub(crate) mod list;
pub(crate) mod paginated;
pub(crate) mod purchase;
pub(crate) mod update;
