//! PostgreSQL-backed [`RecordStore`] using Diesel.
//!
//! Uniqueness of usernames and phone numbers is enforced by table
//! constraints; violations come back as [`RecordStoreError::Duplicate`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::UserRecord;
use crate::domain::ports::{RecordFilter, RecordStore, RecordStoreError};

use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::record_store_error_mapping::{map_diesel_error, map_pool_error};
use super::schema::users;

/// Diesel implementation of the record store port.
#[derive(Clone)]
pub struct DieselRecordStore {
    pool: DbPool,
}

impl DieselRecordStore {
    /// Wrap a pool whose database has the `users` migration applied.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_record(row: UserRow) -> Result<UserRecord, RecordStoreError> {
    let username = row.username.clone();
    UserRecord::try_from(row).map_err(|err| {
        warn!(%username, error = %err, "stored user row failed validation");
        RecordStoreError::query(format!("invalid stored record: {err}"))
    })
}

#[async_trait]
impl RecordStore for DieselRecordStore {
    async fn find_one(
        &self,
        filter: &RecordFilter,
    ) -> Result<Option<UserRecord>, RecordStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = match filter {
            RecordFilter::Username(username) => {
                users::table
                    .filter(users::username.eq(username.as_str()))
                    .select(UserRow::as_select())
                    .first(&mut conn)
                    .await
            }
            RecordFilter::Credentials(credentials) => {
                users::table
                    .filter(users::username.eq(credentials.username().as_str()))
                    .filter(users::password.eq(credentials.password().expose()))
                    .select(UserRow::as_select())
                    .first(&mut conn)
                    .await
            }
        }
        .optional()
        .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }

    async fn insert(&self, record: &UserRecord) -> Result<(), RecordStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(users::table)
            .values(NewUserRow::from(record))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<UserRecord>, RecordStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_iter()
            .map(row_to_record)
            .collect()
    }

    async fn remove(&self, record: &UserRecord) -> Result<(), RecordStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(users::table.filter(users::username.eq(record.username().as_str())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
