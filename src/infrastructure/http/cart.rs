//! `cart/` endpoints.

use async_trait::async_trait;
use serde::Serialize;
use tracing::instrument;

use super::client::{ApiClient, AuthMode};
use crate::domain::{Cart, CartApi};
use crate::shared::error::AppError;

#[derive(Serialize)]
struct AddToCart {
    item_id: i64,
    quantity: u32,
}

#[derive(Serialize)]
struct UpdateQuantity {
    quantity: u32,
}

#[async_trait]
impl CartApi for ApiClient {
    async fn cart(&self) -> Result<Cart, AppError> {
        self.get("cart/", &[], AuthMode::Bearer).await
    }

    #[instrument(skip(self))]
    async fn add_to_cart(&self, item_id: i64, quantity: u32) -> Result<Cart, AppError> {
        self.post("cart/add/", &AddToCart { item_id, quantity }, AuthMode::Bearer)
            .await
    }

    #[instrument(skip(self))]
    async fn update_quantity(&self, item_id: i64, quantity: u32) -> Result<Cart, AppError> {
        self.put(&format!("cart/item/{}/", item_id), &UpdateQuantity { quantity })
            .await
    }

    #[instrument(skip(self))]
    async fn remove_from_cart(&self, item_id: i64) -> Result<Cart, AppError> {
        self.delete(&format!("cart/item/{}/remove/", item_id)).await
    }

    async fn clear_cart(&self) -> Result<Cart, AppError> {
        self.delete("cart/clear/").await
    }
}
