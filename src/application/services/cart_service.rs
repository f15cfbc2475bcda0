//! Cart Service
//!
//! Cart page operations. Every mutation answers with the whole cart, which
//! replaces the page's snapshot.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::{Cart, CartApi, MAX_CART_QUANTITY, MIN_CART_QUANTITY};
use crate::shared::error::AppError;

/// Cart service trait
#[async_trait]
pub trait CartService: Send + Sync {
    async fn cart(&self) -> Result<Cart, AppError>;

    /// Put one unit of `item_id` in the cart.
    async fn add_item(&self, item_id: i64) -> Result<Cart, AppError>;

    /// Set the quantity of a line.
    ///
    /// Returns `Ok(None)` without calling the API when `quantity` is below one.
    async fn update_quantity(&self, item_id: i64, quantity: u32) -> Result<Option<Cart>, AppError>;

    async fn remove_item(&self, item_id: i64) -> Result<Cart, AppError>;

    async fn clear(&self) -> Result<Cart, AppError>;
}

/// CartService implementation
pub struct CartServiceImpl<C: CartApi> {
    api: Arc<C>,
}

impl<C: CartApi> CartServiceImpl<C> {
    pub fn new(api: Arc<C>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<C: CartApi + 'static> CartService for CartServiceImpl<C> {
    async fn cart(&self) -> Result<Cart, AppError> {
        self.api.cart().await
    }

    async fn add_item(&self, item_id: i64) -> Result<Cart, AppError> {
        let cart = self.api.add_to_cart(item_id, MIN_CART_QUANTITY).await?;
        info!(item_id, total_items = cart.total_items, "Added to cart");
        Ok(cart)
    }

    async fn update_quantity(&self, item_id: i64, quantity: u32) -> Result<Option<Cart>, AppError> {
        if quantity < MIN_CART_QUANTITY {
            debug!(item_id, quantity, "Ignoring quantity below minimum");
            return Ok(None);
        }
        if quantity > MAX_CART_QUANTITY {
            return Err(AppError::InvalidInput(format!(
                "Quantity must be between {} and {}",
                MIN_CART_QUANTITY, MAX_CART_QUANTITY
            )));
        }

        self.api.update_quantity(item_id, quantity).await.map(Some)
    }

    async fn remove_item(&self, item_id: i64) -> Result<Cart, AppError> {
        let cart = self.api.remove_from_cart(item_id).await?;
        info!(item_id, "Removed from cart");
        Ok(cart)
    }

    async fn clear(&self) -> Result<Cart, AppError> {
        let cart = self.api.clear_cart().await?;
        info!("Cart cleared");
        Ok(cart)
    }
}
