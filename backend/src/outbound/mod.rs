//! Outbound adapters implementing domain ports for infrastructure.
//!
//! - **memory**: process-local record store for development and tests
//! - **persistence**: PostgreSQL-backed record store using Diesel
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
