//! Blog entity and validated creation/update inputs.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::user::UserId;

/// Validation failures for blog inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlogValidationError {
    /// Title or url was missing or empty.
    #[error("title or url missing from request")]
    MissingTitleOrUrl,
    /// Identifier was not a well-formed id string.
    #[error("invalid id")]
    InvalidId,
}

/// Unique identifier of a stored blog, serialized as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct BlogId(Uuid);

impl BlogId {
    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier supplied by a client.
    pub fn parse(raw: &str) -> Result<Self, BlogValidationError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| BlogValidationError::InvalidId)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for BlogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated fields accepted from clients on create and update.
///
/// ## Invariants
/// - `title` and `url` are present and non-empty.
/// - `likes` is always defined; it defaults to zero when omitted.
///
/// The owner is deliberately absent: it is bound from the verified identity
/// at creation and never altered afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    title: String,
    author: Option<String>,
    url: String,
    likes: u32,
}

impl BlogDraft {
    /// Validate raw request fields.
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        url: Option<String>,
        likes: Option<u32>,
    ) -> Result<Self, BlogValidationError> {
        let title = title
            .filter(|value| !value.is_empty())
            .ok_or(BlogValidationError::MissingTitleOrUrl)?;
        let url = url
            .filter(|value| !value.is_empty())
            .ok_or(BlogValidationError::MissingTitleOrUrl)?;
        Ok(Self {
            title,
            author,
            url,
            likes: likes.unwrap_or(0),
        })
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn likes(&self) -> u32 {
        self.likes
    }
}

/// Stored blog document.
///
/// `user` is the owning reference. It is `None` only for documents seeded
/// outside the API; documents created through the API are always owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u32,
    pub user: Option<UserId>,
}

impl Blog {
    /// Create a blog from a validated draft, owned by the given user.
    pub fn from_draft(draft: BlogDraft, owner: UserId) -> Self {
        Self {
            id: BlogId::random(),
            title: draft.title,
            author: draft.author,
            url: draft.url,
            likes: draft.likes,
            user: Some(owner),
        }
    }

    /// Apply an update draft in place. The owner field is never altered by
    /// this path.
    pub fn apply(&mut self, draft: BlogDraft) {
        self.title = draft.title;
        self.author = draft.author;
        self.url = draft.url;
        self.likes = draft.likes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft(title: Option<&str>, url: Option<&str>) -> Result<BlogDraft, BlogValidationError> {
        BlogDraft::new(
            title.map(str::to_owned),
            None,
            url.map(str::to_owned),
            None,
        )
    }

    #[rstest]
    #[case(None, Some("https://example.com"))]
    #[case(Some(""), Some("https://example.com"))]
    #[case(Some("Title"), None)]
    #[case(Some("Title"), Some(""))]
    #[case(None, None)]
    fn missing_title_or_url_is_rejected(#[case] title: Option<&str>, #[case] url: Option<&str>) {
        let err = draft(title, url).expect_err("incomplete drafts must fail");
        assert_eq!(err, BlogValidationError::MissingTitleOrUrl);
    }

    #[rstest]
    fn likes_default_to_zero_when_omitted() {
        let draft = BlogDraft::new(
            Some("Title".to_owned()),
            Some("Author".to_owned()),
            Some("https://example.com".to_owned()),
            None,
        )
        .expect("valid draft");
        assert_eq!(draft.likes(), 0);
    }

    #[rstest]
    fn apply_replaces_fields_but_not_the_owner() {
        let owner = UserId::random();
        let original = BlogDraft::new(
            Some("Before".to_owned()),
            None,
            Some("https://before.example".to_owned()),
            Some(1),
        )
        .expect("valid draft");
        let mut blog = Blog::from_draft(original, owner);

        let update = BlogDraft::new(
            Some("After".to_owned()),
            Some("Someone".to_owned()),
            Some("https://after.example".to_owned()),
            Some(7),
        )
        .expect("valid draft");
        blog.apply(update);

        assert_eq!(blog.title, "After");
        assert_eq!(blog.author.as_deref(), Some("Someone"));
        assert_eq!(blog.url, "https://after.example");
        assert_eq!(blog.likes, 7);
        assert_eq!(blog.user, Some(owner));
    }

    #[rstest]
    fn blog_id_round_trips_through_its_string_form() {
        let id = BlogId::random();
        assert_eq!(BlogId::parse(&id.to_string()).expect("well-formed id"), id);
    }

    #[rstest]
    #[case("5a422a851b54a676234d17f")]
    #[case("nonsense")]
    fn malformed_ids_are_rejected(#[case] raw: &str) {
        let err = BlogId::parse(raw).expect_err("malformed ids must fail");
        assert_eq!(err, BlogValidationError::InvalidId);
    }
}
