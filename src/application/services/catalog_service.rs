//! Catalog Service
//!
//! Item browsing: the home feed, featured and barter listings, item detail,
//! search, the caller's own listings and posting new items.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::application::dto::HomeFeed;
use crate::domain::{Item, ItemApi, ItemQuery, MembershipApi, NewItem, SearchQuery};
use crate::shared::error::AppError;

/// Home page section sizes.
pub const HOME_FEATURED_LIMIT: usize = 4;
pub const HOME_BARTER_LIMIT: usize = 4;
pub const HOME_LATEST_LIMIT: usize = 20;

/// Catalog service trait
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Home feed; the membership banner is only fetched when `authenticated`.
    async fn home(&self, authenticated: bool) -> Result<HomeFeed, AppError>;

    async fn featured(&self) -> Result<Vec<Item>, AppError>;

    async fn barter(&self) -> Result<Vec<Item>, AppError>;

    async fn item(&self, id: i64) -> Result<Item, AppError>;

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Item>, AppError>;

    /// Listings owned by the logged-in user.
    async fn my_items(&self) -> Result<Vec<Item>, AppError>;

    async fn post_item(&self, item: &NewItem) -> Result<Item, AppError>;

    /// Promote an owned listing; returns the server confirmation.
    async fn set_featured(&self, id: i64) -> Result<String, AppError>;

    async fn unset_featured(&self, id: i64) -> Result<String, AppError>;
}

/// CatalogService implementation
pub struct CatalogServiceImpl<I, M>
where
    I: ItemApi,
    M: MembershipApi,
{
    items: Arc<I>,
    membership: Arc<M>,
}

impl<I, M> CatalogServiceImpl<I, M>
where
    I: ItemApi,
    M: MembershipApi,
{
    pub fn new(items: Arc<I>, membership: Arc<M>) -> Self {
        Self { items, membership }
    }
}

/// Keep a section's items, or log and leave it empty.
fn section(
    name: &str,
    result: Result<Vec<Item>, AppError>,
    first_error: &mut Option<AppError>,
) -> Vec<Item> {
    match result {
        Ok(items) => items,
        Err(e) => {
            warn!(section = name, error = %e, "Home section failed to load");
            first_error.get_or_insert(e);
            Vec::new()
        }
    }
}

#[async_trait]
impl<I, M> CatalogService for CatalogServiceImpl<I, M>
where
    I: ItemApi + 'static,
    M: MembershipApi + 'static,
{
    async fn home(&self, authenticated: bool) -> Result<HomeFeed, AppError> {
        let featured_query = ItemQuery::featured().with_limit(HOME_FEATURED_LIMIT);
        let barter_query = ItemQuery::barter().with_limit(HOME_BARTER_LIMIT);
        let latest_query = ItemQuery::default().with_limit(HOME_LATEST_LIMIT);

        let membership = async {
            if !authenticated {
                return None;
            }
            match self.membership.membership().await {
                Ok(membership) => Some(membership),
                Err(e) => {
                    debug!(error = %e, "No membership banner");
                    None
                }
            }
        };

        let (featured, barter, latest, membership) = tokio::join!(
            self.items.list_items(&featured_query),
            self.items.list_items(&barter_query),
            self.items.list_items(&latest_query),
            membership,
        );

        // Sections fail independently; only a fully empty page is an error.
        let mut first_error = None;
        let all_failed = featured.is_err() && barter.is_err() && latest.is_err();
        let feed = HomeFeed {
            featured: section("featured", featured, &mut first_error),
            barter: section("barter", barter, &mut first_error),
            latest: section("latest", latest, &mut first_error),
            membership,
        };

        match first_error {
            Some(e) if all_failed => Err(e),
            _ => Ok(feed),
        }
    }

    async fn featured(&self) -> Result<Vec<Item>, AppError> {
        self.items.list_items(&ItemQuery::featured()).await
    }

    async fn barter(&self) -> Result<Vec<Item>, AppError> {
        self.items.list_items(&ItemQuery::barter()).await
    }

    async fn item(&self, id: i64) -> Result<Item, AppError> {
        self.items.get_item(id).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Item>, AppError> {
        let results = self.items.search_items(query).await?;
        debug!(q = %query.q, hits = results.len(), "Search finished");
        Ok(results)
    }

    async fn my_items(&self) -> Result<Vec<Item>, AppError> {
        self.items.list_items(&ItemQuery::mine()).await
    }

    async fn post_item(&self, item: &NewItem) -> Result<Item, AppError> {
        let created = self.items.create_item(item).await?;
        info!(item_id = created.id, title = %created.title, "Item posted");
        Ok(created)
    }

    async fn set_featured(&self, id: i64) -> Result<String, AppError> {
        let message = self.items.set_featured(id).await?;
        info!(item_id = id, "Item featured");
        Ok(message)
    }

    async fn unset_featured(&self, id: i64) -> Result<String, AppError> {
        let message = self.items.unset_featured(id).await?;
        info!(item_id = id, "Item unfeatured");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Condition, Membership, MockItemApi, MockMembershipApi};

    fn create_test_item(id: i64, title: &str) -> Item {
        Item {
            id,
            owner: Some(7),
            owner_username: Some("somchai".into()),
            title: title.into(),
            description: String::new(),
            price: None,
            category: "Books".into(),
            image_url: None,
            image_urls: Vec::new(),
            is_available: true,
            is_barter: false,
            allow_barter: false,
            is_featured: false,
            desired_item: None,
            condition: Condition::Good,
            location: String::new(),
            contact_phone: String::new(),
            created_at: None,
        }
    }

    fn create_test_service(
        items: MockItemApi,
        membership: MockMembershipApi,
    ) -> CatalogServiceImpl<MockItemApi, MockMembershipApi> {
        CatalogServiceImpl::new(Arc::new(items), Arc::new(membership))
    }

    #[tokio::test]
    async fn test_home_loads_sections_with_limits() {
        let mut items = MockItemApi::new();
        items.expect_list_items().times(3).returning(|q| {
            let title = if q.featured {
                "featured"
            } else if q.is_barter {
                "barter"
            } else {
                "latest"
            };
            Ok(vec![create_test_item(q.limit.unwrap_or_default() as i64, title)])
        });
        let mut membership = MockMembershipApi::new();
        membership.expect_membership().never();

        let feed = create_test_service(items, membership).home(false).await.unwrap();

        assert_eq!(feed.featured[0].id, HOME_FEATURED_LIMIT as i64);
        assert_eq!(feed.barter[0].title, "barter");
        assert_eq!(feed.latest[0].id, HOME_LATEST_LIMIT as i64);
        assert!(feed.membership.is_none());
    }

    #[tokio::test]
    async fn test_home_membership_for_authenticated_visitor() {
        let mut items = MockItemApi::new();
        items.expect_list_items().returning(|_| Ok(Vec::new()));
        let mut membership = MockMembershipApi::new();
        membership.expect_membership().times(1).returning(|| {
            Ok(Membership {
                is_valid: true,
                is_active: true,
                ..Default::default()
            })
        });

        let feed = create_test_service(items, membership).home(true).await.unwrap();

        assert!(feed.is_empty());
        assert!(feed.membership.is_some_and(|m| m.is_valid));
    }

    #[tokio::test]
    async fn test_home_tolerates_partial_failure() {
        let mut items = MockItemApi::new();
        items.expect_list_items().returning(|q| {
            if q.featured {
                Err(AppError::Network("timeout".into()))
            } else {
                Ok(vec![create_test_item(1, "Desk lamp")])
            }
        });
        let mut membership = MockMembershipApi::new();
        membership
            .expect_membership()
            .returning(|| Err(AppError::Unauthorized("expired".into())));

        let feed = create_test_service(items, membership).home(true).await.unwrap();

        assert!(feed.featured.is_empty());
        assert_eq!(feed.latest.len(), 1);
        assert!(feed.membership.is_none());
    }

    #[tokio::test]
    async fn test_home_fails_when_every_section_fails() {
        let mut items = MockItemApi::new();
        items
            .expect_list_items()
            .returning(|_| Err(AppError::Network("connection refused".into())));

        let result = create_test_service(items, MockMembershipApi::new()).home(false).await;

        assert!(matches!(result, Err(AppError::Network(_))));
    }

    #[tokio::test]
    async fn test_my_items_uses_mine_query() {
        let mut items = MockItemApi::new();
        items
            .expect_list_items()
            .withf(|q| q.mine && q.limit.is_none())
            .returning(|_| Ok(vec![create_test_item(3, "Bicycle")]));

        let mine = create_test_service(items, MockMembershipApi::new()).my_items().await.unwrap();

        assert_eq!(mine.len(), 1);
    }

    #[tokio::test]
    async fn test_set_featured_passes_server_message() {
        let mut items = MockItemApi::new();
        items
            .expect_set_featured()
            .withf(|id| *id == 5)
            .returning(|_| Ok("Item set as featured".into()));

        let message = create_test_service(items, MockMembershipApi::new())
            .set_featured(5)
            .await
            .unwrap();

        assert_eq!(message, "Item set as featured");
    }
}
