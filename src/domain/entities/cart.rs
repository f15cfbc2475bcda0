//! Cart entity and port.
//!
//! Maps to `cart/`. Every mutating endpoint answers with the whole cart.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::item::Item;
use crate::domain::value_objects::Price;
use crate::shared::error::AppError;

/// Quantity bounds accepted by the cart endpoints.
pub const MIN_CART_QUANTITY: u32 = 1;
pub const MAX_CART_QUANTITY: u32 = 99;

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: i64,
    pub item: Item,
    pub quantity: u32,
    #[serde(default)]
    pub total_price: Option<Price>,
}

impl CartLine {
    /// Line total, computed locally when the server omitted it.
    pub fn line_total(&self) -> Price {
        self.total_price
            .or_else(|| self.item.price.map(|p| p.times(self.quantity)))
            .unwrap_or_default()
    }
}

/// The caller's cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: i64,
    #[serde(default)]
    pub items: Vec<CartLine>,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub total_price: Price,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn line_for_item(&self, item_id: i64) -> Option<&CartLine> {
        self.items.iter().find(|line| line.item.id == item_id)
    }
}

/// Port for cart endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartApi: Send + Sync {
    async fn cart(&self) -> Result<Cart, AppError>;

    /// Add `quantity` of an item; an existing line is incremented.
    async fn add_to_cart(&self, item_id: i64, quantity: u32) -> Result<Cart, AppError>;

    /// Set the quantity of the line holding `item_id`.
    async fn update_quantity(&self, item_id: i64, quantity: u32) -> Result<Cart, AppError>;

    async fn remove_from_cart(&self, item_id: i64) -> Result<Cart, AppError>;

    async fn clear_cart(&self) -> Result<Cart, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_deserializes_api_payload() {
        let json = r#"{
            "id": 1, "user": 4,
            "items": [{"id": 9, "item": {"id": 21, "title": "Kettle", "price": "300.00"},
                       "quantity": 2, "total_price": "600.00", "added_at": "2025-03-01T00:00:00Z"}],
            "total_items": 2, "total_price": 600.0,
            "created_at": "2025-03-01T00:00:00Z", "updated_at": "2025-03-01T00:00:00Z"
        }"#;

        let cart: Cart = serde_json::from_str(json).unwrap();

        assert_eq!(cart.total_items, 2);
        assert_eq!(cart.total_price.cents(), 60000);
        assert_eq!(cart.line_for_item(21).unwrap().quantity, 2);
        assert!(cart.line_for_item(22).is_none());
    }

    #[test]
    fn test_line_total_fallback() {
        let line: CartLine = serde_json::from_str(
            r#"{"id": 1, "item": {"id": 2, "title": "Mug", "price": "45.50"}, "quantity": 3}"#,
        )
        .unwrap();

        assert_eq!(line.line_total().cents(), 13650);
    }
}
