//! HTTP error payloads and mapping from domain errors.
//!
//! Keep the domain free of transport concerns by translating [`Error`]
//! into Actix responses here. This is the single centralized translator:
//! handlers forward failures intact with `?` and never pick status codes
//! themselves.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;

use crate::domain::ports::{
    BlogRepositoryError, PasswordHasherError, TokenError, UserRepositoryError,
};
use crate::domain::{BlogValidationError, Error, ErrorCode, UserValidationError};

/// Wire envelope `{ "error": <message> }` returned on every failure path.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ApiError {
    #[serde(skip)]
    code: ErrorCode,
    #[serde(rename = "error")]
    #[schema(example = "title or url missing from request")]
    message: String,
}

impl ApiError {
    /// Construct an API error from a domain failure.
    pub fn from_domain(error: Error) -> Self {
        Self {
            code: error.code(),
            message: error.message().to_owned(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    fn to_status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(value: Error) -> Self {
        ApiError::from_domain(value)
    }
}

/// Store failures carry no client-safe detail; surface them as 500s.
impl From<BlogRepositoryError> for ApiError {
    fn from(err: BlogRepositoryError) -> Self {
        Error::internal(err.to_string()).into()
    }
}

impl From<UserRepositoryError> for ApiError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::DuplicateUsername => {
                Error::invalid_request(err.to_string()).into()
            }
            UserRepositoryError::Query(_) => Error::internal(err.to_string()).into(),
        }
    }
}

impl From<PasswordHasherError> for ApiError {
    fn from(err: PasswordHasherError) -> Self {
        Error::internal(err.to_string()).into()
    }
}

/// Token integrity failures are client errors (400), distinct from the
/// "unauthenticated" 401 paths.
impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid(message) => Error::invalid_request(message).into(),
            TokenError::Expired => Error::unauthorized("token expired").into(),
            TokenError::Issue(message) => Error::internal(message).into(),
        }
    }
}

impl From<BlogValidationError> for ApiError {
    fn from(err: BlogValidationError) -> Self {
        Error::invalid_request(err.to_string()).into()
    }
}

impl From<UserValidationError> for ApiError {
    fn from(err: UserValidationError) -> Self {
        Error::invalid_request(err.to_string()).into()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code, ErrorCode::InternalError) {
            error!(message = %self.message, "internal error");
            let mut redacted = self.clone();
            redacted.message = "internal server error".to_owned();
            return HttpResponse::build(self.status_code()).json(redacted);
        }
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::unauthorized("token missing"), StatusCode::UNAUTHORIZED)]
    #[case(Error::not_found("unknown endpoint"), StatusCode::NOT_FOUND)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn codes_map_to_the_expected_status(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(ApiError::from(error).status_code(), expected);
    }

    #[rstest]
    fn the_envelope_has_a_single_error_field() {
        let err = ApiError::from(Error::invalid_request("title or url missing from request"));
        let value = serde_json::to_value(&err).expect("serializable");
        assert_eq!(
            value,
            serde_json::json!({ "error": "title or url missing from request" })
        );
    }

    #[rstest]
    fn duplicate_usernames_become_validation_errors() {
        let err = ApiError::from(UserRepositoryError::DuplicateUsername);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.message().contains("expected `username` to be unique"));
    }

    #[rstest]
    fn expired_tokens_are_unauthenticated_not_malformed() {
        let err = ApiError::from(TokenError::Expired);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    fn internal_messages_are_redacted_in_the_response() {
        let err = ApiError::from(Error::internal("connection refused"));
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
