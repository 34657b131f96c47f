//! Bearer token authentication.

use super::ApiError;
use crate::board::domain::UserId;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Acting user.
    pub user_id: UserId,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

/// HMAC keys for issuing and verifying access tokens.
#[derive(Clone)]
pub struct AuthKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    validation: Validation,
}

impl AuthKeys {
    /// Derives both keys from a shared secret.
    #[must_use]
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret)),
            decoding: Arc::new(DecodingKey::from_secret(secret)),
            validation: Validation::default(),
        }
    }

    /// Issues a token for `user_id` that expires after `ttl`.
    ///
    /// # Errors
    ///
    /// Returns [`jsonwebtoken::errors::Error`] when signing fails.
    pub fn issue(&self, user_id: UserId, ttl: Duration) -> jsonwebtoken::errors::Result<String> {
        let claims = Claims {
            user_id,
            exp: (Utc::now() + ttl).timestamp(),
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verifies `token` and returns the user it was issued to.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when the signature, expiry, or
    /// claims are invalid.
    pub fn verify(&self, token: &str) -> Result<UserId, ApiError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims.user_id)
            .map_err(|err| {
                tracing::debug!(error = %err, "rejected access token");
                ApiError::Unauthorized
            })
    }
}

/// The user named by a verified bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AuthKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(ApiError::Unauthorized)?;

        AuthKeys::from_ref(state).verify(token).map(Self)
    }
}
