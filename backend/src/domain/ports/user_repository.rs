//! Port for user document storage.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::blog::BlogId;
use crate::domain::user::{User, UserId};

/// Errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserRepositoryError {
    /// Uniqueness invariant on `username` was violated.
    #[error("expected `username` to be unique")]
    DuplicateUsername,
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {0}")]
    Query(String),
}

/// Port for the Users collection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user.
    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Look up a user by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Look up a user by username.
    async fn find_by_username(&self, username: &str)
    -> Result<Option<User>, UserRepositoryError>;

    /// Store a new user document, rejecting duplicate usernames.
    async fn insert(&self, user: User) -> Result<User, UserRepositoryError>;

    /// Append a blog reference to the user's owned list.
    async fn attach_blog(&self, user: &UserId, blog: &BlogId) -> Result<(), UserRepositoryError>;

    /// Remove a blog reference from the user's owned list.
    async fn detach_blog(&self, user: &UserId, blog: &BlogId) -> Result<(), UserRepositoryError>;
}
