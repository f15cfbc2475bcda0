//! `users/membership/` endpoint.

use async_trait::async_trait;
use serde::Serialize;
use tracing::instrument;

use super::client::{ApiClient, AuthMode};
use crate::domain::{Membership, MembershipApi};
use crate::shared::error::AppError;

#[derive(Serialize)]
struct Purchase {
    months: u32,
}

#[async_trait]
impl MembershipApi for ApiClient {
    async fn membership(&self) -> Result<Membership, AppError> {
        self.get("users/membership/", &[], AuthMode::Bearer).await
    }

    #[instrument(skip(self))]
    async fn purchase_membership(&self, months: u32) -> Result<Membership, AppError> {
        self.post("users/membership/", &Purchase { months }, AuthMode::Bearer)
            .await
    }
}
