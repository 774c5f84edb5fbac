use async_trait::async_trait;
use axum::extract::FromRequestParts;
use http::header::AUTHORIZATION;
use http::request::Parts;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Role;
use crate::state::AppState;

const TOKEN_TTL_SECS: i64 = 60 * 60 * 24; // 24h

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret: String,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, String> {
        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET is not set".to_string())?;
        if secret.len() < 16 {
            return Err("JWT_SECRET must be at least 16 characters".to_string());
        }
        Ok(Self { secret })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: String,
    pub exp: i64,
}

pub fn issue_token(config: &AuthConfig, user_id: Uuid, role: &str) -> Result<String, AppError> {
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        exp: (chrono::Utc::now() + chrono::Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|_| AppError::Unauthorized)
}

fn verify_token(config: &AuthConfig, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}

// The authenticated caller, decoded from the Bearer token. Handlers take
// this as an extractor; the investor id linked to the account (if any) is
// resolved by the services that need it.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: Role,
}

impl AuthUser {
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;
        let claims = verify_token(&state.auth, token)?;
        let role = Role::parse(&claims.role).ok_or(AppError::Unauthorized)?;
        Ok(AuthUser {
            user_id: claims.sub,
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig {
            secret: "test-secret-test-secret".to_string(),
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let cfg = config();
        let id = Uuid::new_v4();
        let token = issue_token(&cfg, id, "ADMIN").unwrap();
        let claims = verify_token(&cfg, &token).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.role, "ADMIN");
    }

    #[test]
    fn tampered_token_is_rejected() {
        let cfg = config();
        let token = issue_token(&cfg, Uuid::new_v4(), "INVESTOR").unwrap();
        let other = AuthConfig {
            secret: "another-secret-entirely".to_string(),
        };
        assert!(verify_token(&other, &token).is_err());
    }
}
