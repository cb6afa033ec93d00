//! Account primitives: user records and the validated inputs that create or
//! look them up.
//!
//! Inbound adapters hand raw strings and numbers to the constructors here;
//! nothing reaches a port until it has been validated.

use std::fmt;

use serde_json::json;
use zeroize::Zeroizing;

use super::Error;

/// Validation failure raised while building account inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was missing or empty.
    EmptyPassword,
    /// Phone number was missing, empty, or zero.
    MissingPhoneNumber,
    /// Phone number was negative or not numeric.
    InvalidPhoneNumber,
}

impl AccountValidationError {
    /// Name of the offending input field.
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyUsername => "username",
            Self::EmptyPassword => "password",
            Self::MissingPhoneNumber | Self::InvalidPhoneNumber => "phone_number",
        }
    }

    /// Stable machine-readable code for the failure.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyUsername => "empty_username",
            Self::EmptyPassword => "empty_password",
            Self::MissingPhoneNumber => "missing_phone_number",
            Self::InvalidPhoneNumber => "invalid_phone_number",
        }
    }
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::MissingPhoneNumber => write!(f, "phone number is required"),
            Self::InvalidPhoneNumber => write!(f, "phone number must be a positive integer"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

impl From<AccountValidationError> for Error {
    fn from(err: AccountValidationError) -> Self {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": err.field(),
            "code": err.code(),
        }))
    }
}

/// Account name, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Trim and validate a raw username.
    ///
    /// # Examples
    /// ```
    /// use accounts::domain::Username;
    ///
    /// let name = Username::parse("  alice ").expect("non-empty");
    /// assert_eq!(name.as_str(), "alice");
    /// assert!(Username::parse("   ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, AccountValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AccountValidationError::EmptyUsername);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Plaintext password held in a zeroizing buffer.
///
/// Whitespace is preserved; only emptiness is rejected. `Debug` output is
/// masked.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Accept any non-empty password verbatim.
    ///
    /// # Errors
    /// Returns [`AccountValidationError::EmptyPassword`] for an empty string.
    pub fn parse(raw: &str) -> Result<Self, AccountValidationError> {
        if raw.is_empty() {
            return Err(AccountValidationError::EmptyPassword);
        }
        Ok(Self(Zeroizing::new(raw.to_owned())))
    }

    /// Reveal the plaintext for comparison or storage.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(****)")
    }
}

/// Positive phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneNumber(i64);

impl PhoneNumber {
    /// Validate an optional raw value; `None` and `0` count as missing.
    ///
    /// # Examples
    /// ```
    /// use accounts::domain::{AccountValidationError, PhoneNumber};
    ///
    /// assert_eq!(PhoneNumber::parse(Some(555_111)).map(|p| p.get()), Ok(555_111));
    /// assert_eq!(PhoneNumber::parse(Some(0)), Err(AccountValidationError::MissingPhoneNumber));
    /// assert_eq!(PhoneNumber::parse(Some(-1)), Err(AccountValidationError::InvalidPhoneNumber));
    /// ```
    pub fn parse(raw: Option<i64>) -> Result<Self, AccountValidationError> {
        match raw {
            None | Some(0) => Err(AccountValidationError::MissingPhoneNumber),
            Some(value) if value < 0 => Err(AccountValidationError::InvalidPhoneNumber),
            Some(value) => Ok(Self(value)),
        }
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted user account.
///
/// ## Invariants
/// - `username` is unique across the store.
/// - `phone_number` is unique across the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    username: Username,
    phone_number: PhoneNumber,
    password: Password,
}

impl UserRecord {
    /// Assemble a record from validated parts.
    #[must_use]
    pub const fn new(username: Username, phone_number: PhoneNumber, password: Password) -> Self {
        Self {
            username,
            phone_number,
            password,
        }
    }

    /// Rebuild a record from stored column values.
    pub fn try_from_stored(
        username: &str,
        phone_number: i64,
        password: &str,
    ) -> Result<Self, AccountValidationError> {
        Ok(Self::new(
            Username::parse(username)?,
            PhoneNumber::parse(Some(phone_number))?,
            Password::parse(password)?,
        ))
    }

    /// Unique account name.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Unique phone number.
    #[must_use]
    pub const fn phone_number(&self) -> PhoneNumber {
        self.phone_number
    }

    /// Stored password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }
}

/// Validated input for creating an account.
///
/// # Examples
/// ```
/// use accounts::domain::Registration;
///
/// let registration = Registration::try_from_parts(" alice ", "p1", Some(555_111))
///     .expect("valid registration");
/// assert_eq!(registration.username().as_str(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    record: UserRecord,
}

impl Registration {
    /// Build a registration from already validated fields.
    #[must_use]
    pub const fn new(username: Username, password: Password, phone_number: PhoneNumber) -> Self {
        Self {
            record: UserRecord::new(username, phone_number, password),
        }
    }

    /// Validate raw inputs in field order: username, password, phone number.
    pub fn try_from_parts(
        username: &str,
        password: &str,
        phone_number: Option<i64>,
    ) -> Result<Self, AccountValidationError> {
        let username = Username::parse(username)?;
        let password = Password::parse(password)?;
        let phone_number = PhoneNumber::parse(phone_number)?;
        Ok(Self::new(username, password, phone_number))
    }

    /// Username the registration claims.
    #[must_use]
    pub const fn username(&self) -> &Username {
        self.record.username()
    }

    /// Consume the registration, yielding the record to persist.
    #[must_use]
    pub fn into_record(self) -> UserRecord {
        self.record
    }
}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty and keeps caller-provided whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: Username,
    password: Password,
}

impl LoginCredentials {
    /// Validate a raw username and password pair.
    ///
    /// # Errors
    /// Returns the first failing field, username before password.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, AccountValidationError> {
        Ok(Self {
            username: Username::parse(username)?,
            password: Password::parse(password)?,
        })
    }

    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for account input validation.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", Some(1), AccountValidationError::EmptyUsername)]
    #[case("   ", "pw", Some(1), AccountValidationError::EmptyUsername)]
    #[case("alice", "", Some(1), AccountValidationError::EmptyPassword)]
    #[case("alice", "pw", None, AccountValidationError::MissingPhoneNumber)]
    #[case("alice", "pw", Some(0), AccountValidationError::MissingPhoneNumber)]
    #[case("alice", "pw", Some(-7), AccountValidationError::InvalidPhoneNumber)]
    #[case("", "", None, AccountValidationError::EmptyUsername)]
    fn invalid_registrations(
        #[case] username: &str,
        #[case] password: &str,
        #[case] phone_number: Option<i64>,
        #[case] expected: AccountValidationError,
    ) {
        let err = Registration::try_from_parts(username, password, phone_number)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn registration_trims_username_but_not_password() {
        let record = Registration::try_from_parts("  alice  ", " p1 ", Some(555_111))
            .expect("valid inputs")
            .into_record();
        assert_eq!(record.username().as_str(), "alice");
        assert_eq!(record.password().expose(), " p1 ");
        assert_eq!(record.phone_number().get(), 555_111);
    }

    #[rstest]
    #[case("", "pw", AccountValidationError::EmptyUsername)]
    #[case("bob", "", AccountValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: AccountValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn password_debug_is_masked() {
        let password = Password::parse("hunter2").expect("non-empty");
        assert_eq!(format!("{password:?}"), "Password(****)");
    }

    #[rstest]
    #[case(AccountValidationError::EmptyUsername, "username", "empty_username")]
    #[case(AccountValidationError::InvalidPhoneNumber, "phone_number", "invalid_phone_number")]
    fn validation_errors_map_to_invalid_request(
        #[case] err: AccountValidationError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let mapped = Error::from(err);
        assert_eq!(mapped.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            mapped.details(),
            Some(&json!({ "field": field, "code": code }))
        );
    }

    #[rstest]
    fn stored_rows_are_revalidated() {
        let err = UserRecord::try_from_stored("alice", 0, "p1").expect_err("zero phone");
        assert_eq!(err, AccountValidationError::MissingPhoneNumber);
    }
}
