//! HS256 bearer tokens via `jsonwebtoken`.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{TokenClaims, TokenError, TokenService};
use crate::domain::{User, UserId};

/// Wire-format claims carried inside issued tokens.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    username: String,
    exp: u64,
}

/// Token signer/verifier backed by a symmetric secret.
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl JwtTokenService {
    /// Build a service around the given signing secret and token lifetime.
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    fn now_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user: &User) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.as_str().to_owned(),
            exp: Self::now_secs() + self.ttl_secs,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| TokenError::Issue(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let data =
            decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(|err| {
                match err.kind() {
                    errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(err.to_string()),
                }
            })?;

        let user_id = UserId::parse(&data.claims.sub)
            .map_err(|_| TokenError::Invalid("invalid token subject".to_owned()))?;
        Ok(TokenClaims {
            user_id,
            username: data.claims.username,
        })
    }
}
