//! PostgreSQL persistence for user records via Diesel.
//!
//! - `DieselRecordStore` implements the record store port over a `bb8` pool
//!   of `diesel-async` connections.
//! - Row structs and the table definition stay private to this module.
//! - Database errors are mapped to `RecordStoreError` variants; unique
//!   constraint names decide which duplicate field is reported.
//!
//! # Example
//!
//! ```ignore
//! use accounts::outbound::persistence::{DbPool, DieselRecordStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/accounts")).await?;
//! let store = DieselRecordStore::new(pool);
//! ```

mod diesel_record_store;
mod migrations;
mod models;
mod pool;
mod record_store_error_mapping;
mod schema;

pub use diesel_record_store::DieselRecordStore;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
