//! Order Service
//!
//! Order history, checkout and cancellation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use validator::Validate;

use crate::application::dto::OrderForm;
use crate::domain::{NewOrder, Order, OrderApi};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// Order service trait
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn orders(&self) -> Result<Vec<Order>, AppError>;

    /// Validate the checkout form and place the order.
    async fn create(&self, form: &OrderForm) -> Result<Order, AppError>;

    /// Cancel an order that has not shipped yet.
    async fn cancel(&self, order: &Order) -> Result<Order, AppError>;
}

/// OrderService implementation
pub struct OrderServiceImpl<O: OrderApi> {
    api: Arc<O>,
}

impl<O: OrderApi> OrderServiceImpl<O> {
    pub fn new(api: Arc<O>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<O: OrderApi + 'static> OrderService for OrderServiceImpl<O> {
    async fn orders(&self) -> Result<Vec<Order>, AppError> {
        self.api.orders().await
    }

    async fn create(&self, form: &OrderForm) -> Result<Order, AppError> {
        form.validate()
            .map_err(|e| AppError::Validation(validation_error(&e)))?;

        let order = self
            .api
            .create_order(&NewOrder {
                item: form.item,
                quantity: form.quantity,
                shipping_address: form.shipping_address.trim().to_string(),
                notes: form.notes.trim().to_string(),
            })
            .await?;

        info!(order_id = order.id, item_id = form.item, "Order placed");
        Ok(order)
    }

    async fn cancel(&self, order: &Order) -> Result<Order, AppError> {
        if !order.status.is_cancellable() {
            return Err(AppError::InvalidInput(format!(
                "Order #{} can no longer be cancelled",
                order.id
            )));
        }

        let cancelled = self.api.cancel_order(order.id).await?;
        info!(order_id = order.id, "Order cancelled");
        Ok(cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockOrderApi, OrderStatus};
    use serde_json::json;

    fn create_test_order(status: &str) -> Order {
        serde_json::from_value(json!({
            "id": 31,
            "item": 4,
            "quantity": 1,
            "total_price": "120.00",
            "status": status,
            "payment_status": "pending",
        }))
        .unwrap()
    }

    fn checkout_form(quantity: u32) -> OrderForm {
        OrderForm {
            item: 4,
            quantity,
            shipping_address: "  Dorm C, room 214 ".into(),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_trims_address() {
        let mut api = MockOrderApi::new();
        api.expect_create_order()
            .withf(|o| o.item == 4 && o.shipping_address == "Dorm C, room 214")
            .returning(|_| Ok(create_test_order("pending")));
        let service = OrderServiceImpl::new(Arc::new(api));

        let order = service.create(&checkout_form(1)).await.unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_quantity() {
        let mut api = MockOrderApi::new();
        api.expect_create_order().never();
        let service = OrderServiceImpl::new(Arc::new(api));

        let err = service.create(&checkout_form(0)).await.unwrap_err();

        let AppError::Validation(fields) = err else {
            panic!("expected validation error");
        };
        assert!(fields.contains_key("quantity"));
    }

    #[tokio::test]
    async fn test_shipped_order_is_not_cancelled() {
        let mut api = MockOrderApi::new();
        api.expect_cancel_order().never();
        let service = OrderServiceImpl::new(Arc::new(api));

        let result = service.cancel(&create_test_order("shipped")).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_pending_order_is_cancelled() {
        let mut api = MockOrderApi::new();
        api.expect_cancel_order()
            .withf(|id| *id == 31)
            .returning(|_| Ok(create_test_order("cancelled")));
        let service = OrderServiceImpl::new(Arc::new(api));

        let order = service.cancel(&create_test_order("pending")).await.unwrap();

        assert_eq!(order.status, OrderStatus::Cancelled);
    }
}
