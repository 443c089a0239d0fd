//! In-memory Blogs collection.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::ports::{BlogRepository, BlogRepositoryError};
use crate::domain::{Blog, BlogDraft, BlogId};

/// Document store adapter holding blogs in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryBlogRepository {
    blogs: RwLock<HashMap<BlogId, Blog>>,
}

#[async_trait]
impl BlogRepository for MemoryBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, BlogRepositoryError> {
        Ok(self.blogs.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogRepositoryError> {
        Ok(self.blogs.read().get(id).cloned())
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, BlogRepositoryError> {
        self.blogs.write().insert(blog.id, blog.clone());
        Ok(blog)
    }

    async fn update(
        &self,
        id: &BlogId,
        draft: BlogDraft,
    ) -> Result<Option<Blog>, BlogRepositoryError> {
        let mut blogs = self.blogs.write();
        Ok(blogs.get_mut(id).map(|blog| {
            blog.apply(draft);
            blog.clone()
        }))
    }

    async fn delete(&self, id: &BlogId) -> Result<bool, BlogRepositoryError> {
        Ok(self.blogs.write().remove(id).is_some())
    }
}
