//! Environment-driven application configuration.

use std::env;
use std::net::SocketAddr;

use tracing::warn;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3003";
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Runtime configuration assembled from the environment.
///
/// - `SECRET`: token-signing key. Mandatory in release builds; debug builds
///   fall back to an ephemeral key so local runs work without setup.
/// - `BIND_ADDR`: listen address, default `0.0.0.0:3003`.
/// - `TOKEN_TTL_SECS`: token lifetime, default one hour.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub token_secret: String,
    pub token_ttl_secs: u64,
}

impl AppConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> std::io::Result<Self> {
        let token_secret = match env::var("SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                if cfg!(debug_assertions) {
                    warn!("SECRET not set; using an ephemeral signing key (dev only)");
                    uuid::Uuid::new_v4().to_string()
                } else {
                    return Err(std::io::Error::other("SECRET must be set"));
                }
            }
        };

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned())
            .parse()
            .map_err(|err| std::io::Error::other(format!("invalid BIND_ADDR: {err}")))?;

        let token_ttl_secs = env::var("TOKEN_TTL_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        Ok(Self {
            bind_addr,
            token_secret,
            token_ttl_secs,
        })
    }
}
