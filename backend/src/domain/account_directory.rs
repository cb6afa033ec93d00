//! Account directory domain service.
//!
//! Implements the [`AccountDirectory`] driving port over any [`RecordStore`].
//! Every operation re-reads the store; nothing is cached between calls.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    AccountDirectory, RecordFilter, RecordStore, RecordStoreError, UniqueField,
};
use crate::domain::{Error, LoginCredentials, Registration, UserRecord, Username};

/// Account directory backed by a record store.
pub struct AccountDirectoryService<S> {
    store: Arc<S>,
}

impl<S> Clone for AccountDirectoryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> AccountDirectoryService<S> {
    /// Create a new service over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> AccountDirectoryService<S>
where
    S: RecordStore,
{
    fn map_store_error(error: RecordStoreError) -> Error {
        debug!(kind = error.kind(), %error, "record store call failed");
        match error {
            RecordStoreError::Duplicate { field } => Self::duplicate(field),
            RecordStoreError::Connection { message } => {
                Error::store(format!("record store unavailable: {message}"))
            }
            RecordStoreError::Query { message } => {
                Error::store(format!("record store error: {message}"))
            }
        }
    }

    fn duplicate(field: UniqueField) -> Error {
        let (message, code) = match field {
            UniqueField::Username => ("user already exists", "duplicate_username"),
            UniqueField::PhoneNumber => {
                ("phone number already registered", "duplicate_phone_number")
            }
        };
        Error::conflict(message).with_details(json!({
            "field": field.as_str(),
            "code": code,
        }))
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<UserRecord>, Error> {
        self.store
            .find_one(&RecordFilter::Username(username.clone()))
            .await
            .map_err(Self::map_store_error)
    }
}

#[async_trait]
impl<S> AccountDirectory for AccountDirectoryService<S>
where
    S: RecordStore,
{
    async fn register(&self, registration: Registration) -> Result<(), Error> {
        if self.find_by_username(registration.username()).await?.is_some() {
            return Err(Self::duplicate(UniqueField::Username));
        }

        let record = registration.into_record();
        self.store
            .insert(&record)
            .await
            .map_err(Self::map_store_error)?;
        info!(username = %record.username(), "user registered");
        Ok(())
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserRecord, Error> {
        self.store
            .find_one(&RecordFilter::Credentials(credentials.clone()))
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(|| Error::authentication_failed("incorrect username or password"))
    }

    async fn list(&self) -> Result<Vec<UserRecord>, Error> {
        self.store.find_all().await.map_err(Self::map_store_error)
    }

    async fn delete(&self, username: &Username) -> Result<(), Error> {
        let record = self
            .find_by_username(username)
            .await?
            .ok_or_else(|| Error::not_found("user does not exist"))?;
        self.store
            .remove(&record)
            .await
            .map_err(Self::map_store_error)?;
        info!(username = %username, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "account_directory_tests.rs"]
mod tests;
