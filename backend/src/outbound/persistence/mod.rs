//! In-memory document store adapters.
//!
//! The storage handle is injected through the repository ports, so the
//! process-local maps here are the shipped store and double as the test
//! fake. Single-document operations are atomic under the lock; handlers
//! sequence cross-document updates themselves.

mod memory_blog_repository;
mod memory_user_repository;

pub use memory_blog_repository::MemoryBlogRepository;
pub use memory_user_repository::MemoryUserRepository;
