//! Ports implemented by outbound adapters.
//!
//! In hexagonal terms these are the seams between the domain and its
//! collaborators: the document store, the token scheme, and the password
//! hasher. Handlers depend on these traits only, so tests can substitute
//! in-memory doubles without wiring real infrastructure.

mod blog_repository;
mod password_hasher;
mod token_service;
mod user_repository;

pub use blog_repository::{BlogRepository, BlogRepositoryError};
pub use password_hasher::{PasswordHasher, PasswordHasherError};
pub use token_service::{TokenClaims, TokenError, TokenService};
pub use user_repository::{UserRepository, UserRepositoryError};
