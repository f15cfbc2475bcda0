//! User entity, token pair, and the auth/profile port.
//!
//! Maps to the `users/*` endpoints of the marketplace API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a marketplace account as returned by `users/profile/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    pub username: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    /// Campus address, mirrored from `email` at registration
    #[serde(default)]
    pub ait_email: Option<String>,

    #[serde(default)]
    pub is_verified: Option<bool>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
}

impl User {
    /// Full name when either part is set, otherwise the username.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
            .collect();

        if parts.is_empty() {
            self.username.clone()
        } else {
            parts.join(" ")
        }
    }
}

/// Login credentials; the token endpoint authenticates by username.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Access/refresh pair issued by `users/token/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    pub access: String,

    /// `users/token/refresh/` only returns a new access token.
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Registration fields sent to `users/register/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Body of a successful registration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisteredAccount {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub ait_email: Option<String>,
}

/// Editable profile fields (`PATCH users/profile/`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.phone.is_none() && self.bio.is_none()
    }
}

/// Port for the authentication and profile endpoints.
///
/// Implemented over HTTP in the infrastructure layer; mocked in session tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a token pair.
    async fn obtain_token(&self, credentials: &Credentials) -> Result<TokenPair, AppError>;

    /// Exchange a refresh token for a new access token.
    async fn refresh_token(&self, refresh: &str) -> Result<TokenPair, AppError>;

    /// Create an account.
    async fn register(&self, registration: &Registration) -> Result<RegisteredAccount, AppError>;

    /// Fetch the profile of the token holder.
    async fn profile(&self) -> Result<User, AppError>;

    /// Update the profile of the token holder.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, AppError>;
}
