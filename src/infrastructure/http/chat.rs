//! `chat/messages/` endpoints.

use async_trait::async_trait;

use super::client::{ApiClient, AuthMode};
use super::Listing;
use crate::domain::{ChatApi, ChatMessage, OutgoingMessage};
use crate::shared::error::AppError;

#[async_trait]
impl ChatApi for ApiClient {
    async fn messages(&self) -> Result<Vec<ChatMessage>, AppError> {
        let listing: Listing<ChatMessage> = self.get("chat/messages/", &[], AuthMode::Bearer).await?;
        Ok(listing.into_vec())
    }

    async fn send_message(&self, message: &OutgoingMessage) -> Result<ChatMessage, AppError> {
        self.post("chat/messages/", message, AuthMode::Bearer).await
    }
}
