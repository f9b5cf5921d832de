//! Shared Postgres fixtures for store tests.


pub(crate) use db::TestDb;
