//! Diesel table definitions for the PostgreSQL schema.
//!
//! Keep in step with `backend/migrations`; `diesel print-schema` regenerates
//! this file from a live database.

diesel::table! {
    /// Registered user accounts.
    ///
    /// `username` is the primary key (`users_pkey`); `phone_number` carries
    /// the `users_phone_number_key` unique constraint.
    users (username) {
        username -> Text,
        phone_number -> Int8,
        password -> Text,
    }
}
