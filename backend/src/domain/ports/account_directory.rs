//! Driving port for account management use-cases.
//!
//! Inbound adapters call this port with validated inputs and never see the
//! record store behind it, so handler tests can substitute a double.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Registration, UserRecord, Username};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Create a new account; fails with a conflict when the username or
    /// phone number is taken.
    async fn register(&self, registration: Registration) -> Result<(), Error>;

    /// Return the record matching both username and password.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserRecord, Error>;

    /// Return every stored record.
    async fn list(&self) -> Result<Vec<UserRecord>, Error>;

    /// Remove the account with `username`.
    async fn delete(&self, username: &Username) -> Result<(), Error>;
}
