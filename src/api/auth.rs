//! Identity API

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::User;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct NewAccount<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Token plus the resolved account, returned by login and register.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

pub async fn login(email: &str, password: &str) -> Result<AuthSession, ApiError> {
    super::post_json("/auth/login", &Credentials { email, password }).await
}

pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthSession, ApiError> {
    super::post_json(
        "/auth/register",
        &NewAccount {
            name,
            email,
            password,
        },
    )
    .await
}

/// Resolve the stored token into the current account.
pub async fn current_user() -> Result<User, ApiError> {
    super::get_json("/auth/me").await
}
