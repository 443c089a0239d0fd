//! Login handler issuing bearer tokens.
//!
//! ```text
//! POST /api/login {"username":"root","password":"sekret"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials};
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Login request body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: String,
}

fn bad_credentials() -> Error {
    Error::unauthorized("invalid username or password")
}

/// Exchange credentials for a signed bearer token.
///
/// Blank credentials, unknown usernames, and wrong passwords all collapse
/// into the same 401 so the response does not reveal which part failed.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ApiError)
    ),
    tags = ["login"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let credentials = LoginCredentials::try_from_parts(&payload.username, &payload.password)
        .map_err(|_| bad_credentials())?;

    let user = state
        .users
        .find_by_username(credentials.username())
        .await?
        .ok_or_else(bad_credentials)?;

    let password_matches = state
        .passwords
        .verify(credentials.password(), &user.password_hash)?;
    if !password_matches {
        return Err(bad_credentials().into());
    }

    let token = state.tokens.issue(&user)?;
    Ok(web::Json(LoginResponse {
        token,
        username: user.username.as_str().to_owned(),
        name: user.name,
    }))
}
