//! Wanted (request-to-buy) posts and posting quota.
//!
//! Maps to `wanted/`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Price;
use crate::shared::error::AppError;

/// Condition the poster will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConditionPreference {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
    #[default]
    Any,
}

impl ConditionPreference {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "new" => Some(Self::New),
            "like_new" | "like-new" => Some(Self::LikeNew),
            "good" => Some(Self::Good),
            "fair" => Some(Self::Fair),
            "poor" => Some(Self::Poor),
            "any" => Some(Self::Any),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::LikeNew => "like_new",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Any => "any",
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::New => "wanted.new",
            Self::LikeNew => "wanted.likeNew",
            Self::Good => "wanted.good",
            Self::Fair => "wanted.fair",
            Self::Poor => "wanted.poor",
            Self::Any => "wanted.any",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WantedItem {
    pub id: i64,

    #[serde(default)]
    pub user: Option<i64>,

    #[serde(default)]
    pub user_username: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub max_price: Option<Price>,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub condition_preference: ConditionPreference,

    #[serde(default)]
    pub contact_phone: String,

    #[serde(default)]
    pub location: String,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub paid_amount: Option<Price>,

    #[serde(default)]
    pub is_free_post: Option<bool>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Posting quota returned by `wanted/post-info/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostInfo {
    pub is_premium: bool,
    pub free_posts_used: u32,
    pub free_posts_remaining: u32,
    pub can_post_free: bool,
    pub posting_fee: Price,
    pub member_free_posts: u32,
}

/// Body of `POST wanted/wanted/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewWantedItem {
    pub title: String,
    pub description: String,
    pub max_price: Option<Price>,
    pub category: String,
    pub condition_preference: ConditionPreference,
    pub contact_phone: String,
    pub location: String,
    /// Posting fee the poster commits to pay out-of-band
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<Price>,
}

/// Port for wanted-post endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WantedApi: Send + Sync {
    /// Active wanted posts; `mine` restricts to the caller's own.
    async fn wanted_items(&self, mine: bool) -> Result<Vec<WantedItem>, AppError>;

    async fn post_info(&self) -> Result<PostInfo, AppError>;

    async fn create_wanted(&self, wanted: &NewWantedItem) -> Result<WantedItem, AppError>;
}
