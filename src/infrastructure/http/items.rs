//! `items/` and `search/items/` endpoints.

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use super::client::{ApiClient, AuthMode};
use super::Listing;
use crate::domain::{Item, ItemApi, ItemQuery, NewItem, SearchQuery};
use crate::shared::error::AppError;
use crate::shared::validation::server_message;

#[async_trait]
impl ItemApi for ApiClient {
    #[instrument(skip(self))]
    async fn list_items(&self, query: &ItemQuery) -> Result<Vec<Item>, AppError> {
        // `my` and `owner` filter on the caller, so they need the token.
        let auth = if query.mine {
            AuthMode::Bearer
        } else {
            AuthMode::Anonymous
        };

        let listing: Listing<Item> = self.get("items/", &query.to_params(), auth).await?;
        let mut items = listing.into_vec();
        if let Some(limit) = query.limit {
            items.truncate(limit);
        }
        Ok(items)
    }

    async fn get_item(&self, id: i64) -> Result<Item, AppError> {
        self.get(&format!("items/{}/", id), &[], AuthMode::Anonymous).await
    }

    #[instrument(skip(self, item), fields(title = %item.title))]
    async fn create_item(&self, item: &NewItem) -> Result<Item, AppError> {
        self.post("items/", item, AuthMode::Bearer).await
    }

    #[instrument(skip(self))]
    async fn search_items(&self, query: &SearchQuery) -> Result<Vec<Item>, AppError> {
        let listing: Listing<Item> = self
            .get("search/items/", &query.to_params(), AuthMode::Anonymous)
            .await?;
        Ok(listing.into_vec())
    }

    async fn set_featured(&self, id: i64) -> Result<String, AppError> {
        let body: Value = self
            .post(&format!("items/{}/set_featured/", id), &Value::Null, AuthMode::Bearer)
            .await?;
        Ok(server_message(&body).unwrap_or_default())
    }

    async fn unset_featured(&self, id: i64) -> Result<String, AppError> {
        let body: Value = self
            .post(&format!("items/{}/unset_featured/", id), &Value::Null, AuthMode::Bearer)
            .await?;
        Ok(server_message(&body).unwrap_or_default())
    }
}
