//! In-memory Users collection.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{BlogId, User, UserId};

/// Document store adapter holding users in a process-local map.
///
/// Username uniqueness is the hard invariant enforced here, standing in for
/// the unique index of an external store.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.users.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users.read().get(id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .users
            .read()
            .values()
            .find(|user| user.username.as_str() == username)
            .cloned())
    }

    async fn insert(&self, user: User) -> Result<User, UserRepositoryError> {
        let mut users = self.users.write();
        let duplicate = users
            .values()
            .any(|existing| existing.username == user.username);
        if duplicate {
            return Err(UserRepositoryError::DuplicateUsername);
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn attach_blog(&self, user: &UserId, blog: &BlogId) -> Result<(), UserRepositoryError> {
        let mut users = self.users.write();
        let user = users
            .get_mut(user)
            .ok_or_else(|| UserRepositoryError::Query(format!("no such user: {user}")))?;
        if !user.blogs.contains(blog) {
            user.blogs.push(*blog);
        }
        Ok(())
    }

    async fn detach_blog(&self, user: &UserId, blog: &BlogId) -> Result<(), UserRepositoryError> {
        let mut users = self.users.write();
        let user = users
            .get_mut(user)
            .ok_or_else(|| UserRepositoryError::Query(format!("no such user: {user}")))?;
        user.blogs.retain(|owned| owned != blog);
        Ok(())
    }
}
