use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::{issue_token, AuthConfig};
use crate::db;
use crate::errors::AppError;
use crate::models::{CreateUser, LoginRequest, LoginResponse, User};

pub async fn login(
    pool: &PgPool,
    auth: &AuthConfig,
    input: LoginRequest,
) -> Result<LoginResponse, AppError> {
    let user = db::user_queries::find_by_username(pool, &input.username)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let parsed = PasswordHash::new(&user.password_hash).map_err(|_| AppError::Unauthorized)?;
    Argon2::default()
        .verify_password(input.password.as_bytes(), &parsed)
        .map_err(|_| AppError::Unauthorized)?;

    let token = issue_token(auth, user.id, &user.role)?;
    Ok(LoginResponse { token, user })
}

pub async fn create(pool: &PgPool, input: CreateUser) -> Result<User, AppError> {
    if input.username.trim().is_empty() {
        return Err(AppError::Validation("Username cannot be empty".into()));
    }
    if input.password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".into(),
        ));
    }
    if db::user_queries::find_by_username(pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Validation("Username is already taken".into()));
    }

    let hash = hash_password(&input.password)?;
    let user = User::new(input.username, hash, input.role);
    let user = db::user_queries::insert(pool, user).await?;
    Ok(user)
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<User>, AppError> {
    let users = db::user_queries::fetch_all(pool).await?;
    Ok(users)
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<User, AppError> {
    let user = db::user_queries::fetch_one(pool, id)
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))?;
    Ok(user)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, AppError> {
    match db::user_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound("User not found".to_string())),
        Ok(n) => Ok(n),
        Err(e) => Err(AppError::from(e)),
    }
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Validation(format!("Failed to hash password: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_against_original_password() {
        let hash = hash_password("correct horse battery").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"correct horse battery", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"wrong password", &parsed)
            .is_err());
    }
}
