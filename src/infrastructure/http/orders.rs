//! `orders/` endpoints.

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use super::client::{ApiClient, AuthMode};
use super::Listing;
use crate::domain::{NewOrder, Order, OrderApi};
use crate::shared::error::AppError;

#[async_trait]
impl OrderApi for ApiClient {
    async fn orders(&self) -> Result<Vec<Order>, AppError> {
        let listing: Listing<Order> = self.get("orders/", &[], AuthMode::Bearer).await?;
        Ok(listing.into_vec())
    }

    #[instrument(skip(self, order), fields(item = order.item, quantity = order.quantity))]
    async fn create_order(&self, order: &NewOrder) -> Result<Order, AppError> {
        self.post("orders/", order, AuthMode::Bearer).await
    }

    #[instrument(skip(self))]
    async fn cancel_order(&self, id: i64) -> Result<Order, AppError> {
        self.post(&format!("orders/{}/cancel/", id), &Value::Null, AuthMode::Bearer)
            .await
    }
}
