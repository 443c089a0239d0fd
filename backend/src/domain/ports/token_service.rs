//! Port for the stateless bearer-token scheme.
//!
//! There is no session store and no revocation list; the subject embedded in
//! a token is trusted only after signature verification.

use thiserror::Error;

use crate::domain::user::{User, UserId};

/// Verified identity extracted from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject: the authenticated user's id.
    pub user_id: UserId,
    /// Username recorded when the token was issued.
    pub username: String,
}

/// Errors raised by token adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature or format verification failed.
    #[error("invalid token: {0}")]
    Invalid(String),
    /// The token is well-formed but past its expiry.
    #[error("token expired")]
    Expired,
    /// Signing a new token failed.
    #[error("token signing failed: {0}")]
    Issue(String),
}

/// Port for issuing and verifying bearer credentials.
pub trait TokenService: Send + Sync {
    /// Sign a credential for the given user.
    fn issue(&self, user: &User) -> Result<String, TokenError>;

    /// Verify signature and expiry, returning the embedded claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
