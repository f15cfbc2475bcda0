//! `users/*` endpoints.

use async_trait::async_trait;
use serde::Serialize;
use tracing::instrument;

use super::client::{ApiClient, AuthMode};
use crate::domain::{AuthApi, Credentials, ProfileUpdate, RegisteredAccount, Registration, TokenPair, User};
use crate::shared::error::AppError;

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[async_trait]
impl AuthApi for ApiClient {
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    async fn obtain_token(&self, credentials: &Credentials) -> Result<TokenPair, AppError> {
        self.post("users/token/", credentials, AuthMode::Anonymous).await
    }

    #[instrument(skip_all)]
    async fn refresh_token(&self, refresh: &str) -> Result<TokenPair, AppError> {
        self.post("users/token/refresh/", &RefreshRequest { refresh }, AuthMode::Anonymous)
            .await
    }

    #[instrument(skip(self, registration), fields(username = %registration.username))]
    async fn register(&self, registration: &Registration) -> Result<RegisteredAccount, AppError> {
        self.post("users/register/", registration, AuthMode::Anonymous).await
    }

    async fn profile(&self) -> Result<User, AppError> {
        self.get("users/profile/", &[], AuthMode::Bearer).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, AppError> {
        self.patch("users/profile/", update).await
    }
}
