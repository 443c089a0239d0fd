//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::inbound::http::blogs::{BlogRequest, BlogResponse, OwnerProjection};
use crate::inbound::http::error::ApiError;
use crate::inbound::http::login::{LoginRequest, LoginResponse};
use crate::inbound::http::users::{BlogProjection, CreateUserRequest, UserResponse};

/// Aggregated OpenAPI description, served at `/api-docs/openapi.json` in
/// debug builds.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::blogs::list_blogs,
        crate::inbound::http::blogs::create_blog,
        crate::inbound::http::blogs::get_blog,
        crate::inbound::http::blogs::update_blog,
        crate::inbound::http::blogs::delete_blog,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::login::login,
    ),
    components(schemas(
        ApiError,
        BlogRequest,
        BlogResponse,
        OwnerProjection,
        BlogProjection,
        CreateUserRequest,
        UserResponse,
        LoginRequest,
        LoginResponse,
    )),
    tags(
        (name = "blogs", description = "Blog CRUD with ownership checks"),
        (name = "users", description = "User registration and listing"),
        (name = "login", description = "Bearer token issuance"),
    )
)]
pub struct ApiDoc;
