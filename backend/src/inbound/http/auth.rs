//! Authentication endpoints.
//!
//! ```text
//! POST /api/auth/register {"username":"alice","email":"alice@example.com","password":"pw123"}
//! POST /api/auth/login {"email":"alice@example.com","password":"pw123"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, ErrorCode, LoginCredentials, Registration, UserId, UserSummary};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Registration request body for `POST /api/auth/register`.
///
/// Fields are optional so that missing and empty values get the same
/// "all fields are required" rejection instead of a deserializer error.
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Successful registration payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: UserId,
}

/// Login request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Successful login payload; carries a bare identity confirmation only.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserSummary,
}

/// Create a new user account.
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<RegisterResponse>> {
    let RegisterRequest {
        username,
        email,
        password,
    } = payload.into_inner();

    let registration = Registration::try_from_parts(
        username.as_deref().unwrap_or_default(),
        email.as_deref().unwrap_or_default(),
        password.as_deref().unwrap_or_default(),
    )
    .map_err(|_| Error::invalid_input("All fields are required"))?;

    let user_id = state.identity.register(&registration).await?;
    Ok(web::Json(RegisterResponse {
        message: "User registered successfully".into(),
        user_id,
    }))
}

/// Verify credentials and return the user's summary.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let LoginRequest { email, password } = payload.into_inner();

    let credentials = LoginCredentials::try_from_parts(
        email.as_deref().unwrap_or_default(),
        password.as_deref().unwrap_or_default(),
    )
    .map_err(|err| Error::invalid_input(err.to_string()))?;

    let user = state
        .identity
        .authenticate(&credentials)
        .await
        .map_err(login_error)?;

    Ok(web::Json(LoginResponse {
        message: "Login successful".into(),
        user,
    }))
}

/// The login surface reports an unknown email as a plain 400, per the
/// external contract; the domain keeps the distinct code for other callers.
fn login_error(err: Error) -> Error {
    if err.code() == ErrorCode::NotFound {
        Error::invalid_input(err.message().to_owned())
    } else {
        err
    }
}
