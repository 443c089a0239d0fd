//! Server construction and route wiring.

mod config;

pub use config::AppConfig;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::Error;
use crate::inbound::http::blogs::{create_blog, delete_blog, get_blog, list_blogs, update_blog};
use crate::inbound::http::login::login;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, list_users};
use crate::inbound::http::{ApiError, unknown_endpoint};

/// Build the application with all routes and the shared state.
///
/// Integration tests call this directly so they exercise the same wiring as
/// the binary: the `/api` scope, the JSON error handler, and the
/// unknown-endpoint fallback.
pub fn build_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // Malformed bodies and wrong-typed fields answer the standard envelope
    // instead of Actix's plain-text 400.
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::from(Error::invalid_request(err.to_string())).into()
    });

    let app = App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config)
        .service(
            web::scope("/api")
                .service(list_blogs)
                .service(create_blog)
                .service(get_blog)
                .service(update_blog)
                .service(delete_blog)
                .service(create_user)
                .service(list_users)
                .service(login),
        )
        .default_service(web::route().to(unknown_endpoint));

    #[cfg(debug_assertions)]
    let app = app.route(
        "/api-docs/openapi.json",
        web::get().to(|| async {
            use utoipa::OpenApi as _;
            web::Json(crate::doc::ApiDoc::openapi())
        }),
    );

    app
}
