//! Translate pool and Diesel failures into [`RecordStoreError`] variants.

use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{RecordStoreError, UniqueField};

use super::pool::PoolError;

/// Primary key constraint on `users.username`.
pub(super) const USERNAME_CONSTRAINT: &str = "users_pkey";
/// Unique constraint on `users.phone_number`.
pub(super) const PHONE_NUMBER_CONSTRAINT: &str = "users_phone_number_key";

pub(super) fn map_pool_error(error: PoolError) -> RecordStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RecordStoreError::connection(message)
        }
    }
}

fn unique_field(info: &(dyn DatabaseErrorInformation + Send + Sync)) -> Option<UniqueField> {
    match info.constraint_name()? {
        USERNAME_CONSTRAINT => Some(UniqueField::Username),
        PHONE_NUMBER_CONSTRAINT => Some(UniqueField::PhoneNumber),
        _ => None,
    }
}

pub(super) fn map_diesel_error(error: DieselError) -> RecordStoreError {
    match &error {
        DieselError::DatabaseError(kind, info) => debug!(
            ?kind,
            message = info.message(),
            constraint = info.constraint_name(),
            "diesel operation failed"
        ),
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            match unique_field(info.as_ref()) {
                Some(field) => RecordStoreError::duplicate(field),
                None => RecordStoreError::query("unique constraint violated"),
            }
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RecordStoreError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => RecordStoreError::query("database query error"),
        _ => RecordStoreError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct ConstraintInfo(Option<&'static str>);

    impl DatabaseErrorInformation for ConstraintInfo {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            Some("users")
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.0
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn unique_violation(constraint: Option<&'static str>) -> DieselError {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(ConstraintInfo(constraint)),
        )
    }

    #[rstest]
    #[case(Some(USERNAME_CONSTRAINT), RecordStoreError::duplicate(UniqueField::Username))]
    #[case(
        Some(PHONE_NUMBER_CONSTRAINT),
        RecordStoreError::duplicate(UniqueField::PhoneNumber)
    )]
    #[case(Some("users_other_key"), RecordStoreError::query("unique constraint violated"))]
    #[case(None, RecordStoreError::query("unique constraint violated"))]
    fn unique_violations_map_by_constraint(
        #[case] constraint: Option<&'static str>,
        #[case] expected: RecordStoreError,
    ) {
        assert_eq!(map_diesel_error(unique_violation(constraint)), expected);
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new(String::from("server closed the connection")),
        );
        assert_eq!(map_diesel_error(error).kind(), "connection");
    }

    #[rstest]
    fn other_failures_are_query_errors() {
        assert_eq!(
            map_diesel_error(DieselError::NotFound),
            RecordStoreError::query("database error")
        );
    }

    #[rstest]
    fn pool_checkout_is_a_connection_error() {
        assert_eq!(
            map_pool_error(PoolError::checkout("timed out")),
            RecordStoreError::connection("timed out")
        );
    }
}
