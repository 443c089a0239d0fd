//! Port for blog document storage.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::blog::{Blog, BlogDraft, BlogId};

/// Errors raised by blog repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlogRepositoryError {
    /// Query or mutation failed during execution.
    #[error("blog repository query failed: {0}")]
    Query(String),
}

/// Port for the Blogs collection.
///
/// Single-document operations are atomic; sequences across documents are the
/// caller's responsibility and run without extra coordination. Lost races
/// surface as ordinary `None`/`false` results, never as panics.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Return every stored blog.
    async fn find_all(&self) -> Result<Vec<Blog>, BlogRepositoryError>;

    /// Look up a blog by id.
    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogRepositoryError>;

    /// Store a new blog document.
    async fn insert(&self, blog: Blog) -> Result<Blog, BlogRepositoryError>;

    /// Apply draft fields to the stored document, leaving the owner
    /// untouched. Returns the updated document, or `None` when the id is
    /// unknown.
    async fn update(
        &self,
        id: &BlogId,
        draft: BlogDraft,
    ) -> Result<Option<Blog>, BlogRepositoryError>;

    /// Remove the document. Returns `true` when a document was removed.
    async fn delete(&self, id: &BlogId) -> Result<bool, BlogRepositoryError>;
}
