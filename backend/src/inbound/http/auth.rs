//! Bearer-token extraction and identity resolution for HTTP handlers.
//!
//! Keep the endpoint modules focused on request/response mapping by
//! concentrating credential handling here: lifting the raw token from the
//! `Authorization` header, verifying it, and resolving the subject against
//! the Users collection.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};
use futures_util::future::{Ready, ready};

use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Raw bearer credential lifted from the `Authorization` header.
///
/// Absent or non-Bearer headers yield `None`: extraction never fails, and
/// deciding whether "unauthenticated" is an error belongs to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(Option<String>);

impl BearerToken {
    /// Lift the token from a raw header value, if it carries the Bearer
    /// scheme.
    pub fn from_header_value(value: Option<&str>) -> Self {
        let token = value
            .and_then(|raw| raw.strip_prefix("Bearer "))
            .map(str::to_owned);
        Self(token)
    }

    /// The raw token string, when one was supplied.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequest for BearerToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let value = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|header| header.to_str().ok());
        ready(Ok(Self::from_header_value(value)))
    }
}

/// Resolve the caller's verified identity.
///
/// - missing token: 401 `token missing`
/// - signature or format failure: 400 (from the verifier)
/// - expired token: 401 `token expired`
/// - subject not present in the Users collection: 401 `invalid token`
pub async fn require_user(state: &HttpState, token: &BearerToken) -> ApiResult<User> {
    let raw = token
        .as_deref()
        .ok_or_else(|| Error::unauthorized("token missing"))?;
    let claims = state.tokens.verify(raw)?;
    let user = state.users.find_by_id(&claims.user_id).await?;
    Ok(user.ok_or_else(|| Error::unauthorized("invalid token"))?)
}
