//! HTTP inbound adapter exposing the REST endpoints.

pub mod auth;
pub mod blogs;
pub mod error;
pub mod login;
pub mod state;
pub mod users;

pub use error::{ApiError, ApiResult};

use actix_web::HttpResponse;

use crate::domain::Error;

/// Fallback handler for unrecognized routes.
///
/// Responds `404 { "error": "unknown endpoint" }`.
pub async fn unknown_endpoint() -> ApiResult<HttpResponse> {
    Err(Error::not_found("unknown endpoint").into())
}
