//! Internal Diesel row structs for the `users` table.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;

use crate::domain::{AccountValidationError, UserRecord};

use super::schema::users;

/// Row read from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub username: String,
    pub phone_number: i64,
    pub password: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = AccountValidationError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        UserRecord::try_from_stored(&row.username, row.phone_number, &row.password)
    }
}

/// Insertable view over a domain record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub phone_number: i64,
    pub password: &'a str,
}

impl<'a> From<&'a UserRecord> for NewUserRow<'a> {
    fn from(record: &'a UserRecord) -> Self {
        Self {
            username: record.username().as_str(),
            phone_number: record.phone_number().get(),
            password: record.password().expose(),
        }
    }
}
