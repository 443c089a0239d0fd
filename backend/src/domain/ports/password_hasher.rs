//! Port for salted password hashing.

use thiserror::Error;

use crate::domain::user::PasswordHash;

/// Errors raised by password hashing adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordHasherError {
    /// Hashing or verification failed inside the backend.
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Port for deriving and checking salted password hashes.
pub trait PasswordHasher: Send + Sync {
    /// Derive a salted hash from a raw password.
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHasherError>;

    /// Check a raw password against a stored hash.
    fn verify(&self, password: &str, hash: &PasswordHash)
    -> Result<bool, PasswordHasherError>;
}
