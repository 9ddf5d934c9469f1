use async_trait::async_trait;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use spinner_core::identity::{IdentityProvider, UserIdentity};
use spinner_core::{CoreError, CoreResult};
use spinner_shared::Masked;

use crate::{error::AppError, state::AppState};

// ============================================================================
// JWT Claims
// ============================================================================

/// Claims issued by the hosted auth service. Only the fields we surface are
/// modelled.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IdentityClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    pub aud: String,
    pub exp: usize,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UserMetadata {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<IdentityClaims> for UserIdentity {
    fn from(claims: IdentityClaims) -> Self {
        UserIdentity {
            user_id: claims.sub,
            email: claims.email.map(Masked::new),
            display_name: claims.user_metadata.full_name,
            avatar_url: claims.user_metadata.avatar_url,
        }
    }
}

// ============================================================================
// Identity Provider
// ============================================================================

/// Verifies HS256 tokens signed with the provider's shared secret.
pub struct JwtIdentityProvider {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityProvider {
    pub fn new(secret: &str, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn verify(&self, token: &str) -> CoreResult<UserIdentity> {
        let data = decode::<IdentityClaims>(token, &self.key, &self.validation)
            .map_err(|e| CoreError::IdentityError(format!("Invalid token: {}", e)))?;
        Ok(data.claims.into())
    }
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

// ============================================================================
// Authentication Middleware
// ============================================================================

/// Rejects the request with 401 unless a valid bearer token is present.
pub async fn require_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let Some(token) = bearer_token(&req) else {
        return AppError::AuthenticationError("Missing bearer token".to_string()).into_response();
    };

    match state.identity.verify(token).await {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Err(e) => {
            tracing::debug!("Rejected token: {}", e);
            AppError::from(e).into_response()
        }
    }
}

/// Attaches the identity when a valid token is present. Anonymous and
/// invalid tokens both pass through without one.
pub async fn optional_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let identity = match bearer_token(&req) {
        Some(token) => state.identity.verify(token).await.ok(),
        None => None,
    };
    if let Some(identity) = identity {
        req.extensions_mut().insert(identity);
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token(secret: &str, aud: &str, exp_offset: i64) -> String {
        let claims = IdentityClaims {
            sub: "user-42".to_string(),
            email: Some("sam@example.com".to_string()),
            aud: aud.to_string(),
            exp: (chrono::Utc::now().timestamp() + exp_offset) as usize,
            user_metadata: UserMetadata {
                full_name: Some("Sam".to_string()),
                avatar_url: None,
            },
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_yields_identity() {
        let provider = JwtIdentityProvider::new("secret", "authenticated");
        let identity = provider.verify(&token("secret", "authenticated", 3600)).await.unwrap();

        assert_eq!(identity.user_id, "user-42");
        assert_eq!(identity.display_name.as_deref(), Some("Sam"));
        assert_eq!(identity.email.unwrap().expose(), "sam@example.com");
    }

    #[tokio::test]
    async fn test_rejects_bad_tokens() {
        let provider = JwtIdentityProvider::new("secret", "authenticated");

        for bad in [
            token("other-secret", "authenticated", 3600),
            token("secret", "anon", 3600),
            token("secret", "authenticated", -3600),
            "not-a-jwt".to_string(),
        ] {
            let err = provider.verify(&bad).await.unwrap_err();
            assert!(matches!(err, CoreError::IdentityError(_)));
        }
    }
}
