//! Response DTOs
//!
//! Page-level aggregates. Several pages merge more than one endpoint into a
//! single snapshot; these structures hold the merged result.

use crate::domain::{Item, Membership, Order, PostInfo, User, WantedItem, Wishlist};

/// Home page snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeFeed {
    pub featured: Vec<Item>,
    pub barter: Vec<Item>,
    pub latest: Vec<Item>,
    /// Only fetched for authenticated visitors
    pub membership: Option<Membership>,
}

impl HomeFeed {
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.barter.is_empty() && self.latest.is_empty()
    }
}

/// Personal page snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalOverview {
    pub user: User,
    pub items: Vec<Item>,
    pub membership: Membership,
    pub orders: Vec<Order>,
    pub wishlist: Option<Wishlist>,
}

impl PersonalOverview {
    pub fn available_items(&self) -> usize {
        self.items.iter().filter(|item| item.is_available).count()
    }
}

/// New-wanted page snapshot: quota first, then the form.
#[derive(Debug, Clone, PartialEq)]
pub struct WantedQuota {
    pub info: PostInfo,
    /// Shown whenever the next post is not free
    pub payment_required: bool,
}

impl From<PostInfo> for WantedQuota {
    fn from(info: PostInfo) -> Self {
        Self {
            payment_required: !info.can_post_free,
            info,
        }
    }
}

/// Outcome of creating a wanted post.
#[derive(Debug, Clone, PartialEq)]
pub struct WantedPosted {
    pub wanted: WantedItem,
    /// Whether the poster still has to pay the posting fee out-of-band
    pub payment_due: bool,
}
