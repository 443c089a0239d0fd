//! Shared harness for the HTTP integration suites.
//!
//! Builds the same app the binary runs, over fresh in-memory adapters, and
//! offers seeding helpers so scenarios can arrange users, blogs, and tokens
//! without going through the endpoints under test.

use std::sync::Arc;

use backend::domain::{Blog, BlogId, PasswordHash, User, UserId, Username};
use backend::inbound::http::state::HttpState;
use backend::outbound::auth::{BcryptPasswordHasher, JwtTokenService};
use backend::outbound::persistence::{MemoryBlogRepository, MemoryUserRepository};

pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// Fresh state over empty collections. Clones share the same store, so a
/// test can seed and assert through the state while driving the app.
pub fn test_state() -> HttpState {
    HttpState {
        blogs: Arc::new(MemoryBlogRepository::default()),
        users: Arc::new(MemoryUserRepository::default()),
        tokens: Arc::new(JwtTokenService::new(TEST_SECRET, 3600)),
        passwords: Arc::new(BcryptPasswordHasher::with_cost(4)),
    }
}

/// Store a user whose password is `password`, hashed for real so login
/// scenarios can exercise the verifier.
pub async fn seed_user(state: &HttpState, username: &str, password: &str) -> User {
    let hash = state.passwords.hash(password).expect("hash password");
    let user = User::new(
        Username::new(username).expect("valid username"),
        format!("{username} the tester"),
        hash,
    );
    state.users.insert(user).await.expect("insert user")
}

/// Bearer token for a seeded user.
pub fn token_for(state: &HttpState, user: &User) -> String {
    state.tokens.issue(user).expect("issue token")
}

/// Bearer token whose subject is not present in the Users collection.
pub fn token_for_missing_user(state: &HttpState) -> String {
    let ghost = User::new(
        Username::new("ghost").expect("valid username"),
        "Ghost".to_owned(),
        PasswordHash::new("$2b$04$hash".to_owned()),
    );
    state.tokens.issue(&ghost).expect("issue token")
}

/// Store a blog directly, optionally owned, keeping the owner's reference
/// list in sync.
pub async fn seed_blog(state: &HttpState, owner: Option<&User>, title: &str, url: &str) -> Blog {
    let blog = Blog {
        id: BlogId::random(),
        title: title.to_owned(),
        author: None,
        url: url.to_owned(),
        likes: 0,
        user: owner.map(|user| user.id),
    };
    let created = state.blogs.insert(blog).await.expect("insert blog");
    if let Some(user) = owner {
        state
            .users
            .attach_blog(&user.id, &created.id)
            .await
            .expect("attach blog");
    }
    created
}

/// Current size of the Blogs collection.
pub async fn blog_count(state: &HttpState) -> usize {
    state.blogs.find_all().await.expect("find_all").len()
}

/// Current size of the Users collection.
pub async fn user_count(state: &HttpState) -> usize {
    state.users.find_all().await.expect("find_all").len()
}

/// Owned blog ids recorded on a user document.
pub async fn owned_blog_ids(state: &HttpState, user: &UserId) -> Vec<BlogId> {
    state
        .users
        .find_by_id(user)
        .await
        .expect("find user")
        .expect("user exists")
        .blogs
        .clone()
}
