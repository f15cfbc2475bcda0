//! `wanted/` endpoints.

use async_trait::async_trait;
use tracing::instrument;

use super::client::{ApiClient, AuthMode};
use super::Listing;
use crate::domain::{NewWantedItem, PostInfo, WantedApi, WantedItem};
use crate::shared::error::AppError;

#[async_trait]
impl WantedApi for ApiClient {
    async fn wanted_items(&self, mine: bool) -> Result<Vec<WantedItem>, AppError> {
        let (query, auth) = if mine {
            (vec![("my", "true".to_string())], AuthMode::Bearer)
        } else {
            (Vec::new(), AuthMode::Anonymous)
        };

        let listing: Listing<WantedItem> = self.get("wanted/wanted/", &query, auth).await?;
        Ok(listing.into_vec())
    }

    async fn post_info(&self) -> Result<PostInfo, AppError> {
        self.get("wanted/post-info/", &[], AuthMode::Bearer).await
    }

    #[instrument(skip(self, wanted), fields(title = %wanted.title, paid = wanted.paid_amount.is_some()))]
    async fn create_wanted(&self, wanted: &NewWantedItem) -> Result<WantedItem, AppError> {
        self.post("wanted/wanted/", wanted, AuthMode::Bearer).await
    }
}
