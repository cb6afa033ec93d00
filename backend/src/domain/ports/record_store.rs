//! Driven port for user record persistence.
//!
//! Adapters own the records exclusively; callers never cache them between
//! operations.

use std::fmt;

use async_trait::async_trait;

use crate::domain::{LoginCredentials, UserRecord, Username};

use super::define_port_error;

/// Field protected by a uniqueness rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueField {
    Username,
    PhoneNumber,
}

impl UniqueField {
    /// Column name reported in conflict details.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::PhoneNumber => "phone_number",
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

define_port_error! {
    /// Errors raised by record store adapters.
    pub enum RecordStoreError {
        /// The store could not be reached.
        Connection { message: String } => "record store connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "record store query failed: {message}",
        /// An insert collided with an existing record.
        Duplicate { field: UniqueField } => "record store rejected duplicate {field}",
    }
}

/// Lookup criteria for a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// Match on username alone.
    Username(Username),
    /// Match on username and exact password together.
    Credentials(LoginCredentials),
}

impl RecordFilter {
    /// Whether `record` satisfies this filter.
    pub fn matches(&self, record: &UserRecord) -> bool {
        match self {
            Self::Username(username) => record.username() == username,
            Self::Credentials(credentials) => {
                record.username() == credentials.username()
                    && record.password() == credentials.password()
            }
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the first record matching `filter`.
    async fn find_one(&self, filter: &RecordFilter)
    -> Result<Option<UserRecord>, RecordStoreError>;

    /// Persist a new record, enforcing username and phone number uniqueness.
    async fn insert(&self, record: &UserRecord) -> Result<(), RecordStoreError>;

    /// Fetch every record in store-native order.
    async fn find_all(&self) -> Result<Vec<UserRecord>, RecordStoreError>;

    /// Remove the record with the same username as `record`.
    async fn remove(&self, record: &UserRecord) -> Result<(), RecordStoreError>;
}
