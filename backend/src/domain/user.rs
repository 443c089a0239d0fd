//! User entity and validated field newtypes.
//!
//! Constructors here perform the single parse-and-validate step for
//! registration inputs so handlers never carry ad-hoc field checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::domain::blog::BlogId;

/// Validation failures for user fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// Identifier was not a well-formed id string.
    #[error("invalid id")]
    InvalidId,
    /// Username was missing or shorter than the minimum length.
    #[error("username is required and must be at least 3 characters long")]
    ShortUsername,
    /// Password was missing or shorter than the minimum length.
    #[error("a password is required, and must be more than 3 characters long")]
    ShortPassword,
}

/// Unique identifier of a stored user, serialized as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier supplied by a client.
    pub fn parse(raw: &str) -> Result<Self, UserValidationError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated username.
///
/// ## Invariants
/// - Trimmed of surrounding whitespace.
/// - At least three characters long; uniqueness is enforced by the
///   persistence layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validate and construct a username from raw input.
    pub fn new(raw: &str) -> Result<Self, UserValidationError> {
        let normalized = raw.trim();
        if normalized.chars().count() < 3 {
            return Err(UserValidationError::ShortUsername);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Username string suitable for lookups and projections.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Registration password meeting the minimum length rule.
///
/// The raw credential is zeroized on drop and never stored; only the salted
/// hash derived from it is persisted.
#[derive(Debug, Clone)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate and construct a password from raw input.
    pub fn new(raw: &str) -> Result<Self, UserValidationError> {
        if raw.chars().count() < 3 {
            return Err(UserValidationError::ShortPassword);
        }
        Ok(Self(Zeroizing::new(raw.to_owned())))
    }

    /// Password string handed to the hasher.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Salted password hash. Deliberately has no serde implementations so it can
/// never leak into a JSON projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an already-computed hash string.
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Hash string handed to the verifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Stored user document.
///
/// Identity is immutable once created; `blogs` holds references to the
/// documents this user owns.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub name: String,
    pub password_hash: PasswordHash,
    pub blogs: Vec<BlogId>,
}

impl User {
    /// Create a user with a fresh identifier and no owned blogs.
    pub fn new(username: Username, name: String, password_hash: PasswordHash) -> Self {
        Self {
            id: UserId::random(),
            username,
            name,
            password_hash,
            blogs: Vec::new(),
        }
    }
}
