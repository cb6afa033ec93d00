//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; the wrappers here mirror their
//! serialised shape so documentation stays in the adapter layer.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A required field is missing or malformed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The username or phone number is already registered.
    #[schema(rename = "conflict")]
    Conflict,
    /// No account matches the supplied username and password.
    #[schema(rename = "authentication_failed")]
    AuthenticationFailed,
    /// The referenced account does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The record store failed.
    #[schema(rename = "store_error")]
    StoreError,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Error envelope returned by every failing endpoint.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "conflict")]
    code: ErrorCodeSchema,
    /// Human-readable message; server-side failures read `Server error`.
    #[schema(example = "user already exists")]
    message: String,
    /// Correlation identifier, repeated in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Offending field and detail code, when applicable.
    #[schema(example = json!({"field": "username", "code": "duplicate_username"}))]
    details: Option<serde_json::Value>,
}
