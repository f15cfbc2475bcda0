//! Membership entity and port.
//!
//! Maps to `users/membership/`. Members may feature listings and get free
//! wanted posts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Price;
use crate::shared::error::AppError;

/// Monthly membership fee in THB cents.
pub const MONTHLY_FEE_CENTS: i64 = 199_00;

/// Purchase bounds accepted by the endpoint.
pub const MIN_MEMBERSHIP_MONTHS: u32 = 1;
pub const MAX_MEMBERSHIP_MONTHS: u32 = 12;

/// Membership status. The endpoint answers `{"is_valid": false, "message": ...}`
/// when the caller never subscribed, so every field but `is_valid` is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub price: Option<Price>,

    #[serde(default)]
    pub is_valid: bool,

    #[serde(default)]
    pub message: Option<String>,
}

impl Membership {
    /// Price of a purchase of `months` months.
    pub fn quote(months: u32) -> Price {
        Price::from_cents(MONTHLY_FEE_CENTS).times(months)
    }
}

/// Port for membership endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipApi: Send + Sync {
    async fn membership(&self) -> Result<Membership, AppError>;

    /// Create or extend the caller's membership.
    async fn purchase_membership(&self, months: u32) -> Result<Membership, AppError>;
}
