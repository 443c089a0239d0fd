//! Backend entry-point: wires the blog API over the injected store adapters.

use std::sync::Arc;

use actix_web::HttpServer;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::state::HttpState;
use backend::outbound::auth::{BcryptPasswordHasher, JwtTokenService};
use backend::outbound::persistence::{MemoryBlogRepository, MemoryUserRepository};
use backend::server::{AppConfig, build_app};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env()?;
    let state = HttpState {
        blogs: Arc::new(MemoryBlogRepository::default()),
        users: Arc::new(MemoryUserRepository::default()),
        tokens: Arc::new(JwtTokenService::new(
            config.token_secret.as_bytes(),
            config.token_ttl_secs,
        )),
        passwords: Arc::new(BcryptPasswordHasher::default()),
    };

    HttpServer::new(move || build_app(state.clone()))
        .bind(config.bind_addr)?
        .run()
        .await
}
