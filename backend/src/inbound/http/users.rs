//! Users API handlers.
//!
//! ```text
//! POST /api/users {"username":"root","name":"Root","password":"sekret"}
//! GET  /api/users
//! ```

use std::collections::HashMap;

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Blog, BlogId, Password, User, UserId, Username};
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Registration request body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Reduced blog view attached to user listings: the owner reference is
/// implicit in the surrounding user document.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogProjection {
    pub id: BlogId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: u32,
}

impl From<&Blog> for BlogProjection {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
            likes: blog.likes,
        }
    }
}

/// User document as returned to clients. The password hash is excluded by
/// construction: the type simply has no field for it.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub blogs: Vec<BlogProjection>,
}

impl UserResponse {
    fn new(user: &User, blogs: Vec<BlogProjection>) -> Self {
        Self {
            id: user.id,
            username: user.username.as_str().to_owned(),
            name: user.name.clone(),
            blogs,
        }
    }
}

/// Register a new user.
///
/// The password must meet the minimum length rule and is stored only as a
/// salted hash. Duplicate usernames are rejected by the persistence layer
/// and surface as a validation error.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created user", body = UserResponse),
        (status = 400, description = "Short password or duplicate username", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let password = Password::new(body.password.as_deref().unwrap_or_default())?;
    let username = Username::new(body.username.as_deref().unwrap_or_default())?;

    let hash = state.passwords.hash(password.as_str())?;
    let user = User::new(username, body.name.unwrap_or_default(), hash);
    let created = state.users.insert(user).await?;

    Ok(HttpResponse::Created().json(UserResponse::new(&created, Vec::new())))
}

/// List all users with a reduced projection of their blogs.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse])
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.find_all().await?;
    let blogs: HashMap<BlogId, Blog> = state
        .blogs
        .find_all()
        .await?
        .into_iter()
        .map(|blog| (blog.id, blog))
        .collect();

    let payload = users
        .iter()
        .map(|user| {
            let owned = user
                .blogs
                .iter()
                .filter_map(|id| blogs.get(id))
                .map(BlogProjection::from)
                .collect();
            UserResponse::new(user, owned)
        })
        .collect();
    Ok(web::Json(payload))
}
