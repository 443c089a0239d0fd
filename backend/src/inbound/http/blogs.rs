//! Blogs API handlers.
//!
//! ```text
//! GET    /api/blogs
//! POST   /api/blogs        (bearer token required)
//! GET    /api/blogs/{id}
//! PUT    /api/blogs/{id}   (owner only)
//! DELETE /api/blogs/{id}   (owner only)
//! ```
//!
//! Mutating paths run: credential verification, existence check, ownership
//! check, persistence. Failures short-circuit to the error translator.

use std::collections::HashMap;

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Blog, BlogDraft, BlogId, BlogValidationError, Error, User, UserId};
use crate::inbound::http::auth::{BearerToken, require_user};
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Request body for blog creation and update.
///
/// Fields are optional at the parsing stage so validation can produce the
/// endpoint's own error message instead of a deserializer error. Any
/// client-supplied owner field is ignored.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u32>,
}

impl TryFrom<BlogRequest> for BlogDraft {
    type Error = BlogValidationError;

    fn try_from(value: BlogRequest) -> Result<Self, Self::Error> {
        BlogDraft::new(value.title, value.author, value.url, value.likes)
    }
}

/// Reduced owner view attached to blog projections. Never carries the
/// password hash.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProjection {
    pub id: UserId,
    pub username: String,
    pub name: String,
}

impl From<&User> for OwnerProjection {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.as_str().to_owned(),
            name: user.name.clone(),
        }
    }
}

/// Blog document as returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: BlogId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<OwnerProjection>,
}

impl BlogResponse {
    fn new(blog: Blog, owner: Option<&User>) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user: owner.map(OwnerProjection::from),
        }
    }
}

fn parse_blog_id(raw: &str) -> ApiResult<BlogId> {
    Ok(BlogId::parse(raw)?)
}

/// List all blogs with their owner projection.
#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "All blogs", body = [BlogResponse])
    ),
    tags = ["blogs"],
    operation_id = "listBlogs"
)]
#[get("/blogs")]
pub async fn list_blogs(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BlogResponse>>> {
    let blogs = state.blogs.find_all().await?;
    let owners: HashMap<UserId, User> = state
        .users
        .find_all()
        .await?
        .into_iter()
        .map(|user| (user.id, user))
        .collect();

    let payload = blogs
        .into_iter()
        .map(|blog| {
            let owner = blog.user.and_then(|id| owners.get(&id));
            BlogResponse::new(blog, owner)
        })
        .collect();
    Ok(web::Json(payload))
}

/// Create a blog owned by the authenticated caller.
///
/// The owner is forcibly set to the verified identity; the new blog's id is
/// appended to the owner's reference list in the same request.
#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = BlogRequest,
    responses(
        (status = 201, description = "Created blog", body = BlogResponse),
        (status = 400, description = "Missing title or url", body = ApiError),
        (status = 401, description = "Missing or invalid token", body = ApiError)
    ),
    tags = ["blogs"],
    operation_id = "createBlog"
)]
#[post("/blogs")]
pub async fn create_blog(
    state: web::Data<HttpState>,
    token: BearerToken,
    payload: web::Json<BlogRequest>,
) -> ApiResult<HttpResponse> {
    let user = require_user(&state, &token).await?;
    let draft = BlogDraft::try_from(payload.into_inner())?;

    let created = state.blogs.insert(Blog::from_draft(draft, user.id)).await?;
    state.users.attach_blog(&user.id, &created.id).await?;

    Ok(HttpResponse::Created().json(BlogResponse::new(created, Some(&user))))
}

/// Fetch a single blog by id.
///
/// A missing document answers an empty 404 body. The original API behaved
/// this way and existing clients depend on it; every other failure path
/// returns the JSON envelope.
#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    responses(
        (status = 200, description = "Blog", body = BlogResponse),
        (status = 400, description = "Malformed id", body = ApiError),
        (status = 404, description = "No such blog (empty body)")
    ),
    tags = ["blogs"],
    operation_id = "getBlog"
)]
#[get("/blogs/{id}")]
pub async fn get_blog(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_blog_id(&path)?;
    let Some(blog) = state.blogs.find_by_id(&id).await? else {
        return Ok(HttpResponse::NotFound().finish());
    };

    let owner = match blog.user {
        Some(user_id) => state.users.find_by_id(&user_id).await?,
        None => None,
    };
    Ok(HttpResponse::Ok().json(BlogResponse::new(blog, owner.as_ref())))
}

/// Update a blog's title, author, url, and likes.
///
/// Requires the caller to own the target. Existence is checked before
/// ownership, so an unknown id answers 400 rather than leaking whether the
/// caller would have been permitted.
#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    request_body = BlogRequest,
    responses(
        (status = 200, description = "Updated blog", body = BlogResponse),
        (status = 400, description = "Missing title or url, or unknown id", body = ApiError),
        (status = 401, description = "Not the owner", body = ApiError)
    ),
    tags = ["blogs"],
    operation_id = "updateBlog"
)]
#[put("/blogs/{id}")]
pub async fn update_blog(
    state: web::Data<HttpState>,
    token: BearerToken,
    path: web::Path<String>,
    payload: web::Json<BlogRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_blog_id(&path)?;
    let user = require_user(&state, &token).await?;
    let draft = BlogDraft::try_from(payload.into_inner())?;

    let existing = state
        .blogs
        .find_by_id(&id)
        .await?
        .ok_or_else(|| Error::invalid_request("invalid id"))?;
    crate::domain::authorize_owner(&user.id, existing.user.as_ref())?;

    // A concurrent delete between the fetch and the update surfaces as the
    // same invalid-id error.
    let updated = state
        .blogs
        .update(&id, draft)
        .await?
        .ok_or_else(|| Error::invalid_request("invalid id"))?;
    Ok(HttpResponse::Ok().json(BlogResponse::new(updated, Some(&user))))
}

/// Delete a blog and drop it from the owner's reference list.
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Malformed or unknown id", body = ApiError),
        (status = 401, description = "Not the owner", body = ApiError)
    ),
    tags = ["blogs"],
    operation_id = "deleteBlog"
)]
#[delete("/blogs/{id}")]
pub async fn delete_blog(
    state: web::Data<HttpState>,
    token: BearerToken,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_blog_id(&path)?;
    let user = require_user(&state, &token).await?;

    let existing = state
        .blogs
        .find_by_id(&id)
        .await?
        .ok_or_else(|| Error::invalid_request("invalid id"))?;
    crate::domain::authorize_owner(&user.id, existing.user.as_ref())?;

    state.blogs.delete(&id).await?;
    state.users.detach_blog(&user.id, &id).await?;
    Ok(HttpResponse::NoContent().finish())
}
