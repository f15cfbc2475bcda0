//! Wishlist entity and port.
//!
//! Maps to `wishlist/`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::Item;
use crate::shared::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: i64,
    pub item: Item,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: i64,
    #[serde(default)]
    pub items: Vec<WishlistEntry>,
}

impl Wishlist {
    pub fn contains(&self, item_id: i64) -> bool {
        self.items.iter().any(|entry| entry.item.id == item_id)
    }
}

/// Port for wishlist endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishlistApi: Send + Sync {
    async fn wishlist(&self) -> Result<Wishlist, AppError>;

    /// Add an item; the server rejects duplicates with `{"error": ...}`.
    async fn add_to_wishlist(&self, item_id: i64, notes: Option<String>) -> Result<Wishlist, AppError>;

    async fn remove_from_wishlist(&self, item_id: i64) -> Result<Wishlist, AppError>;
}
