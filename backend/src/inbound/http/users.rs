//! Account API handlers mounted under `/user`.
//!
//! ```text
//! POST   /user/register {"username":"alice","password":"p1","phone_number":555111}
//! POST   /user/login    {"username":"alice","password":"p1"}
//! GET    /user/users
//! DELETE /user/delete/alice
//! ```

use actix_web::middleware::NormalizePath;
use actix_web::{Either, HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    AccountValidationError, LoginCredentials, Password, PhoneNumber, Registration,
    UserRecord, Username,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

pub const REGISTERED_MESSAGE: &str = "User registered successfully";
pub const LOGGED_IN_MESSAGE: &str = "User logged in successfully!";
pub const DELETED_MESSAGE: &str = "User successfully deleted.";

/// Phone number as sent by clients: a JSON number or a numeric string.
///
/// Anything else (fractions, booleans, arrays) lands in `Other` so it is
/// reported as an invalid phone number rather than a malformed body.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(untagged)]
pub enum PhoneNumberInput {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl PhoneNumberInput {
    /// Resolve to the raw numeric value; blank text counts as absent.
    fn into_raw(self) -> Result<Option<i64>, AccountValidationError> {
        match self {
            Self::Number(value) => Ok(Some(value)),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse()
                    .map(Some)
                    .map_err(|_| AccountValidationError::InvalidPhoneNumber)
            }
            Self::Other(_) => Err(AccountValidationError::InvalidPhoneNumber),
        }
    }
}

/// Request body accepted as JSON or as an HTML form.
pub type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

/// Registration body for `POST /user/register`.
///
/// Fields are optional on the wire so missing values surface as validation
/// errors rather than decoding failures.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    #[schema(example = "alice")]
    pub username: Option<String>,
    #[schema(example = "p1")]
    pub password: Option<String>,
    #[schema(example = 555111)]
    pub phone_number: Option<PhoneNumberInput>,
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = AccountValidationError;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        let username = Username::parse(value.username.as_deref().unwrap_or_default())?;
        let password = Password::parse(value.password.as_deref().unwrap_or_default())?;
        let raw_phone = match value.phone_number {
            Some(input) => input.into_raw()?,
            None => None,
        };
        let phone_number = PhoneNumber::parse(raw_phone)?;
        Ok(Registration::new(username, password, phone_number))
    }
}

/// Login body for `POST /user/login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[schema(example = "alice")]
    pub username: Option<String>,
    #[schema(example = "p1")]
    pub password: Option<String>,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = AccountValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.username.as_deref().unwrap_or_default(),
            value.password.as_deref().unwrap_or_default(),
        )
    }
}

/// Stored user record as returned to clients, password included.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserRecordBody {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = 555111)]
    pub phone_number: i64,
    #[schema(example = "p1")]
    pub password: String,
}

impl From<&UserRecord> for UserRecordBody {
    fn from(record: &UserRecord) -> Self {
        Self {
            username: record.username().to_string(),
            phone_number: record.phone_number().get(),
            password: record.password().expose().to_owned(),
        }
    }
}

/// Confirmation message body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User registered successfully")]
    pub msg: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Successful login body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "User logged in successfully!")]
    pub msg: String,
    #[serde(rename = "userData")]
    pub user_data: UserRecordBody,
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/user/register",
    request_body(
        content = RegisterRequest,
        description = "JSON or `application/x-www-form-urlencoded` body"
    ),
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Missing field, or username or phone number taken", body = ErrorSchema),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: JsonOrForm<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration = Registration::try_from(payload.into_inner())?;
    state.accounts.register(registration).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new(REGISTERED_MESSAGE)))
}

/// Authenticate with username and password.
///
/// Unknown usernames and wrong passwords produce the same error.
#[utoipa::path(
    post,
    path = "/user/login",
    request_body(
        content = LoginRequest,
        description = "JSON or `application/x-www-form-urlencoded` body"
    ),
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Missing field or incorrect credentials", body = ErrorSchema),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: JsonOrForm<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let credentials = LoginCredentials::try_from(payload.into_inner())?;
    let record = state.accounts.authenticate(&credentials).await?;
    Ok(web::Json(LoginResponse {
        msg: LOGGED_IN_MESSAGE.to_owned(),
        user_data: UserRecordBody::from(&record),
    }))
}

/// List every registered account.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use accounts::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/user/users",
    responses(
        (status = 200, description = "All users", body = [UserRecordBody]),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserRecordBody>>> {
    let records = state.accounts.list().await?;
    Ok(web::Json(records.iter().map(UserRecordBody::from).collect()))
}

/// Delete the account named in the path.
#[utoipa::path(
    delete,
    path = "/user/delete/{username}",
    params(("username" = String, Path, description = "Account to delete")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Blank username", body = ErrorSchema),
        (status = 404, description = "User does not exist", body = ErrorSchema),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/delete/{username}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let username = Username::parse(&path.into_inner())?;
    state.accounts.delete(&username).await?;
    Ok(web::Json(MessageResponse::new(DELETED_MESSAGE)))
}

/// Mount the account handlers under `/user`.
///
/// Trailing slashes are trimmed inside the scope, so `/user/login/` reaches
/// the same handler as `/user/login`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .wrap(NormalizePath::trim())
            .service(register)
            .service(login)
            .service(list_users)
            .service(delete_user),
    );
}
