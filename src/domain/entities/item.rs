//! Item (listing) entity, list/search filters, and the catalogue port.
//!
//! Maps to `items/` and `search/items/`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Price;
use crate::shared::error::AppError;

/// Item condition, matching the API's choice field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    LikeNew,
    #[default]
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "new" => Some(Self::New),
            "like_new" | "like-new" => Some(Self::LikeNew),
            "good" => Some(Self::Good),
            "fair" => Some(Self::Fair),
            "poor" => Some(Self::Poor),
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
        }
    }

    /// Translation key of the condition label.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::New => "post.conditions.new",
            Self::LikeNew => "post.conditions.like_new",
            Self::Good => "post.conditions.good",
            Self::Fair => "post.conditions.fair",
            Self::Poor => "post.conditions.poor",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A marketplace listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,

    #[serde(default)]
    pub owner: Option<i64>,

    #[serde(default)]
    pub owner_username: Option<String>,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Absent for pure barter listings
    #[serde(default)]
    pub price: Option<Price>,

    #[serde(default)]
    pub category: String,

    /// Legacy single image; `image_urls` supersedes it
    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub image_urls: Vec<String>,

    #[serde(default = "default_true")]
    pub is_available: bool,

    #[serde(default)]
    pub is_barter: bool,

    #[serde(default)]
    pub allow_barter: bool,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub desired_item: Option<String>,

    #[serde(default)]
    pub condition: Condition,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub contact_phone: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl Item {
    /// First image to show: the image list wins over the legacy field.
    pub fn primary_image(&self) -> Option<&str> {
        self.image_urls
            .first()
            .map(String::as_str)
            .or(self.image_url.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Whether the listing has a price to pay (barter-only listings do not).
    pub fn is_priced(&self) -> bool {
        !self.is_barter && self.price.is_some()
    }

    /// Whether `user_id` owns this listing.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner == Some(user_id)
    }
}

/// Filters for `GET items/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemQuery {
    pub featured: bool,
    pub is_barter: bool,
    /// Only the caller's own listings
    pub mine: bool,
    pub owner: Option<i64>,
    /// Applied client-side; the endpoint returns the whole list
    pub limit: Option<usize>,
}

impl ItemQuery {
    pub fn featured() -> Self {
        Self {
            featured: true,
            ..Default::default()
        }
    }

    pub fn barter() -> Self {
        Self {
            is_barter: true,
            ..Default::default()
        }
    }

    pub fn mine() -> Self {
        Self {
            mine: true,
            ..Default::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query string pairs as the API expects them.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.featured {
            params.push(("featured", "true".to_string()));
        }
        if self.is_barter {
            params.push(("is_barter", "true".to_string()));
        }
        if let Some(owner) = self.owner {
            params.push(("owner", owner.to_string()));
        } else if self.mine {
            params.push(("my", "true".to_string()));
        }
        params
    }
}

/// Filters for `GET search/items/`. Empty fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub q: String,
    pub category: String,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    pub condition: Option<Condition>,
    pub location: String,
    pub is_barter: Option<bool>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl SearchQuery {
    pub fn text(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let trimmed = self.q.trim();
        if !trimmed.is_empty() {
            params.push(("q", trimmed.to_string()));
        }
        if !self.category.is_empty() {
            params.push(("category", self.category.clone()));
        }
        if let Some(min) = self.min_price {
            params.push(("min_price", min.to_string()));
        }
        if let Some(max) = self.max_price {
            params.push(("max_price", max.to_string()));
        }
        if let Some(condition) = self.condition {
            params.push(("condition", condition.as_str().to_string()));
        }
        if !self.location.is_empty() {
            params.push(("location", self.location.clone()));
        }
        if let Some(is_barter) = self.is_barter {
            params.push(("is_barter", is_barter.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            params.push(("sort_by", sort_by.clone()));
        }
        if let Some(sort_order) = &self.sort_order {
            params.push(("sort_order", sort_order.clone()));
        }
        params
    }
}

/// Body of `POST items/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub price: Option<Price>,
    pub category: String,
    pub condition: Condition,
    /// First image, kept for clients that only read the legacy field
    pub image_url: Option<String>,
    pub image_urls: Vec<String>,
    pub is_barter: bool,
    pub allow_barter: bool,
    pub desired_item: String,
    pub location: String,
    pub contact_phone: String,
}

/// Port for listing endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemApi: Send + Sync {
    /// List items matching the filters (limit applied by the caller).
    async fn list_items(&self, query: &ItemQuery) -> Result<Vec<Item>, AppError>;

    /// Fetch one item.
    async fn get_item(&self, id: i64) -> Result<Item, AppError>;

    /// Create a listing owned by the caller.
    async fn create_item(&self, item: &NewItem) -> Result<Item, AppError>;

    /// Full-text search with filters.
    async fn search_items(&self, query: &SearchQuery) -> Result<Vec<Item>, AppError>;

    /// Mark an owned item as featured (needs an active membership).
    async fn set_featured(&self, id: i64) -> Result<String, AppError>;

    /// Remove the featured flag from an owned item.
    async fn unset_featured(&self, id: i64) -> Result<String, AppError>;
}
