//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_directory;
mod record_store;

#[cfg(test)]
pub use account_directory::MockAccountDirectory;
pub use account_directory::AccountDirectory;
#[cfg(test)]
pub use record_store::MockRecordStore;
pub use record_store::{RecordFilter, RecordStore, RecordStoreError, UniqueField};
