//! In-process [`RecordStore`] used when no database is configured.
//!
//! Records live in insertion order behind a mutex and vanish with the
//! process. Uniqueness rules match the PostgreSQL schema.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::UserRecord;
use crate::domain::ports::{RecordFilter, RecordStore, RecordStoreError, UniqueField};

/// Mutex-guarded vector of user records.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: Mutex<Vec<UserRecord>>,
}

impl InMemoryRecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<UserRecord>>, RecordStoreError> {
        self.records
            .lock()
            .map_err(|_| RecordStoreError::connection("in-memory record store lock poisoned"))
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn find_one(
        &self,
        filter: &RecordFilter,
    ) -> Result<Option<UserRecord>, RecordStoreError> {
        let records = self.lock()?;
        Ok(records.iter().find(|record| filter.matches(record)).cloned())
    }

    async fn insert(&self, record: &UserRecord) -> Result<(), RecordStoreError> {
        let mut records = self.lock()?;
        if records.iter().any(|r| r.username() == record.username()) {
            return Err(RecordStoreError::duplicate(UniqueField::Username));
        }
        if records
            .iter()
            .any(|r| r.phone_number() == record.phone_number())
        {
            return Err(RecordStoreError::duplicate(UniqueField::PhoneNumber));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<UserRecord>, RecordStoreError> {
        Ok(self.lock()?.clone())
    }

    async fn remove(&self, record: &UserRecord) -> Result<(), RecordStoreError> {
        self.lock()?
            .retain(|existing| existing.username() != record.username());
        Ok(())
    }
}
