//! Transport-agnostic domain model.
//!
//! Entities, validated inputs, and errors live here together with the ports
//! the adapters implement. Nothing in this module knows about HTTP, JSON, or
//! the backing store.

mod auth;
mod blog;
mod error;
pub mod ports;
mod user;

pub use auth::{LoginCredentials, LoginValidationError, authorize_owner};
pub use blog::{Blog, BlogDraft, BlogId, BlogValidationError};
pub use error::{Error, ErrorCode, ErrorValidationError};
pub use user::{Password, PasswordHash, User, UserId, UserValidationError, Username};
