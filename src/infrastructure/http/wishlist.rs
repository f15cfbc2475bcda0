//! `wishlist/` endpoints.

use async_trait::async_trait;
use serde::Serialize;

use super::client::{ApiClient, AuthMode};
use crate::domain::{Wishlist, WishlistApi};
use crate::shared::error::AppError;

#[derive(Serialize)]
struct AddToWishlist {
    item_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

#[async_trait]
impl WishlistApi for ApiClient {
    async fn wishlist(&self) -> Result<Wishlist, AppError> {
        self.get("wishlist/", &[], AuthMode::Bearer).await
    }

    async fn add_to_wishlist(&self, item_id: i64, notes: Option<String>) -> Result<Wishlist, AppError> {
        self.post("wishlist/add/", &AddToWishlist { item_id, notes }, AuthMode::Bearer)
            .await
    }

    async fn remove_from_wishlist(&self, item_id: i64) -> Result<Wishlist, AppError> {
        self.delete(&format!("wishlist/item/{}/remove/", item_id)).await
    }
}
