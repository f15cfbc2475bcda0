//! Wishlist Service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::{Wishlist, WishlistApi};
use crate::shared::error::AppError;

/// Wishlist service trait
#[async_trait]
pub trait WishlistService: Send + Sync {
    async fn wishlist(&self) -> Result<Wishlist, AppError>;

    /// Save an item; blank notes are not sent.
    async fn add_item(&self, item_id: i64, notes: Option<String>) -> Result<Wishlist, AppError>;

    async fn remove_item(&self, item_id: i64) -> Result<Wishlist, AppError>;
}

/// WishlistService implementation
pub struct WishlistServiceImpl<W: WishlistApi> {
    api: Arc<W>,
}

impl<W: WishlistApi> WishlistServiceImpl<W> {
    pub fn new(api: Arc<W>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<W: WishlistApi + 'static> WishlistService for WishlistServiceImpl<W> {
    async fn wishlist(&self) -> Result<Wishlist, AppError> {
        self.api.wishlist().await
    }

    async fn add_item(&self, item_id: i64, notes: Option<String>) -> Result<Wishlist, AppError> {
        let notes = notes.filter(|n| !n.trim().is_empty());
        let wishlist = self.api.add_to_wishlist(item_id, notes).await?;
        info!(item_id, "Added to wishlist");
        Ok(wishlist)
    }

    async fn remove_item(&self, item_id: i64) -> Result<Wishlist, AppError> {
        let wishlist = self.api.remove_from_wishlist(item_id).await?;
        info!(item_id, "Removed from wishlist");
        Ok(wishlist)
    }
}
