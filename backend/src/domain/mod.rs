//! Domain primitives, ports and services.
//!
//! Purpose: define the account model and the account directory use-cases
//! independently of HTTP and storage. Adapters depend on this module, never
//! the other way round.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure payload.
//! - UserRecord, Registration, LoginCredentials — validated account inputs.
//! - AccountDirectoryService — account use-cases over a record store.
//! - TraceId — request-scoped correlation identifier.

pub mod account;
pub mod account_directory;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::account::{
    AccountValidationError, LoginCredentials, Password, PhoneNumber, Registration, UserRecord,
    Username,
};
pub use self::account_directory::AccountDirectoryService;
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use accounts::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("user does not exist"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
