//! Order entity and port.
//!
//! Maps to `orders/`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::Item;
use crate::domain::value_objects::Price;
use crate::shared::error::AppError;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
    /// Any status this client does not know yet
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::Pending => "order.status.pending",
            Self::Confirmed => "order.status.confirmed",
            Self::Shipped => "order.status.shipped",
            Self::Delivered => "order.status.delivered",
            Self::Cancelled => "order.status.cancelled",
            Self::Unknown => "order.status.unknown",
        }
    }

    /// Buyers may cancel before the order ships.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

/// Snapshot of an item at purchase time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i64,
    pub item: Item,
    pub quantity: u32,
    #[serde(default)]
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,

    #[serde(default)]
    pub buyer_username: Option<String>,

    #[serde(default)]
    pub seller_username: Option<String>,

    /// Item id the order was placed for
    #[serde(default)]
    pub item: Option<i64>,

    #[serde(default = "default_quantity")]
    pub quantity: u32,

    #[serde(default)]
    pub total_price: Price,

    #[serde(default)]
    pub status: OrderStatus,

    #[serde(default)]
    pub payment_status: String,

    #[serde(default)]
    pub shipping_address: String,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub order_items: Vec<OrderLine>,
}

fn default_quantity() -> u32 {
    1
}

impl Order {
    /// Title of the first ordered item, for list rendering.
    pub fn title(&self) -> Option<&str> {
        self.order_items.first().map(|line| line.item.title.as_str())
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }
}

/// Body of `POST orders/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    pub item: i64,
    pub quantity: u32,
    pub shipping_address: String,
    pub notes: String,
}

/// Port for order endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Orders placed by the caller.
    async fn orders(&self) -> Result<Vec<Order>, AppError>;

    async fn create_order(&self, order: &NewOrder) -> Result<Order, AppError>;

    async fn cancel_order(&self, id: i64) -> Result<Order, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_does_not_fail() {
        let status: OrderStatus = serde_json::from_str("\"refunded\"").unwrap();
        assert_eq!(status, OrderStatus::Unknown);
    }

    #[test]
    fn test_cancellable_statuses() {
        assert!(OrderStatus::Pending.is_cancellable());
        assert!(OrderStatus::Confirmed.is_cancellable());
        assert!(!OrderStatus::Shipped.is_cancellable());
        assert!(!OrderStatus::Cancelled.is_cancellable());
    }

    #[test]
    fn test_order_deserializes_api_payload() {
        let json = r#"{
            "id": 3, "buyer": 1, "buyer_username": "mei", "seller": 2, "seller_username": "somchai",
            "item": 21, "quantity": 1, "total_price": "300.00", "status": "shipped",
            "payment_status": "paid", "payment_method": null, "shipping_address": "Dorm C 204",
            "notes": "", "created_at": "2025-03-02T09:00:00Z", "updated_at": "2025-03-02T09:00:00Z",
            "order_items": [{"id": 1, "item": {"id": 21, "title": "Kettle"}, "quantity": 1, "price": "300.00"}]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.title(), Some("Kettle"));
        assert!(order.is_paid());
    }
}
