//! Wanted Service
//!
//! Request-to-buy posts. Users get a number of free posts; past that, a post
//! carries the posting fee, which is settled out-of-band.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use validator::Validate;

use crate::application::dto::{WantedForm, WantedPosted, WantedQuota};
use crate::domain::{ConditionPreference, NewWantedItem, PostInfo, Price, WantedApi, WantedItem};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// Wanted service trait
#[async_trait]
pub trait WantedService: Send + Sync {
    /// Active posts; `mine` restricts to the caller's own.
    async fn list(&self, mine: bool) -> Result<Vec<WantedItem>, AppError>;

    /// Free-post allowance of the caller.
    async fn quota(&self) -> Result<WantedQuota, AppError>;

    /// Validate and publish a post.
    ///
    /// `quota` is what the page loaded before showing the form; when it says
    /// the next post is not free, the posting fee is attached.
    async fn post(
        &self,
        form: &WantedForm,
        quota: Option<&PostInfo>,
    ) -> Result<WantedPosted, AppError>;
}

/// WantedService implementation
pub struct WantedServiceImpl<W: WantedApi> {
    api: Arc<W>,
}

impl<W: WantedApi> WantedServiceImpl<W> {
    pub fn new(api: Arc<W>) -> Self {
        Self { api }
    }
}

/// Turn the raw form into a request body.
fn build_post(form: &WantedForm, quota: Option<&PostInfo>) -> Result<NewWantedItem, AppError> {
    let mut errors = form
        .validate()
        .err()
        .map(|e| validation_error(&e))
        .unwrap_or_default();

    let max_price = match form.max_price.trim() {
        "" => None,
        raw => match raw.parse::<Price>() {
            Ok(price) => Some(price),
            Err(_) => {
                errors.insert("max_price".into(), "Enter a valid price".into());
                None
            }
        },
    };

    let condition_preference = match form.condition_preference.trim() {
        "" => ConditionPreference::Any,
        raw => ConditionPreference::from_str(raw).unwrap_or_else(|| {
            errors.insert(
                "condition_preference".into(),
                format!("Unknown condition: {}", raw),
            );
            ConditionPreference::Any
        }),
    };

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(NewWantedItem {
        title: form.title.trim().to_string(),
        description: form.description.trim().to_string(),
        max_price,
        category: form.category.trim().to_string(),
        condition_preference,
        contact_phone: form.contact_phone.trim().to_string(),
        location: form.location.trim().to_string(),
        paid_amount: quota
            .filter(|info| !info.can_post_free)
            .map(|info| info.posting_fee),
    })
}

#[async_trait]
impl<W: WantedApi + 'static> WantedService for WantedServiceImpl<W> {
    async fn list(&self, mine: bool) -> Result<Vec<WantedItem>, AppError> {
        self.api.wanted_items(mine).await
    }

    async fn quota(&self) -> Result<WantedQuota, AppError> {
        self.api.post_info().await.map(WantedQuota::from)
    }

    async fn post(
        &self,
        form: &WantedForm,
        quota: Option<&PostInfo>,
    ) -> Result<WantedPosted, AppError> {
        let body = build_post(form, quota)?;
        let payment_due = body.paid_amount.is_some();

        let wanted = self.api.create_wanted(&body).await?;
        info!(wanted_id = wanted.id, payment_due, "Wanted post published");

        Ok(WantedPosted {
            wanted,
            payment_due,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockWantedApi;
    use serde_json::json;

    fn create_test_quota(can_post_free: bool) -> PostInfo {
        PostInfo {
            is_premium: false,
            free_posts_used: 3,
            free_posts_remaining: if can_post_free { 1 } else { 0 },
            can_post_free,
            posting_fee: Price::from_cents(20_00),
            member_free_posts: 10,
        }
    }

    fn create_test_form() -> WantedForm {
        WantedForm {
            title: " Rice cooker ".into(),
            max_price: "450".into(),
            condition_preference: "like_new".into(),
            ..Default::default()
        }
    }

    fn echo_created(body: &NewWantedItem) -> Result<WantedItem, AppError> {
        Ok(serde_json::from_value(json!({
            "id": 12,
            "user_username": "somchai",
            "title": body.title,
            "is_active": true,
        }))?)
    }

    #[tokio::test]
    async fn test_free_post_has_no_paid_amount() {
        let mut api = MockWantedApi::new();
        api.expect_create_wanted()
            .withf(|body| {
                body.paid_amount.is_none()
                    && body.title == "Rice cooker"
                    && body.max_price == Some(Price::from_cents(450_00))
                    && body.condition_preference == ConditionPreference::LikeNew
            })
            .returning(echo_created);
        let service = WantedServiceImpl::new(Arc::new(api));

        let posted = service
            .post(&create_test_form(), Some(&create_test_quota(true)))
            .await
            .unwrap();

        assert!(!posted.payment_due);
        assert_eq!(posted.wanted.title, "Rice cooker");
    }

    #[tokio::test]
    async fn test_exhausted_quota_attaches_posting_fee() {
        let mut api = MockWantedApi::new();
        api.expect_create_wanted()
            .withf(|body| body.paid_amount == Some(Price::from_cents(20_00)))
            .returning(echo_created);
        let service = WantedServiceImpl::new(Arc::new(api));

        let posted = service
            .post(&create_test_form(), Some(&create_test_quota(false)))
            .await
            .unwrap();

        assert!(posted.payment_due);
    }

    #[tokio::test]
    async fn test_unknown_quota_posts_without_fee() {
        let mut api = MockWantedApi::new();
        api.expect_create_wanted()
            .withf(|body| body.paid_amount.is_none())
            .returning(echo_created);
        let service = WantedServiceImpl::new(Arc::new(api));

        assert!(service.post(&create_test_form(), None).await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let mut api = MockWantedApi::new();
        api.expect_create_wanted().never();
        let service = WantedServiceImpl::new(Arc::new(api));

        let form = WantedForm {
            title: "   ".into(),
            max_price: "cheap".into(),
            condition_preference: "mint".into(),
            ..Default::default()
        };

        let Err(AppError::Validation(fields)) = service.post(&form, None).await else {
            panic!("expected validation error");
        };
        assert_eq!(
            fields.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["condition_preference", "max_price", "title"]
        );
    }

    #[tokio::test]
    async fn test_quota_flags_payment() {
        let mut api = MockWantedApi::new();
        api.expect_post_info().returning(|| Ok(create_test_quota(false)));
        let service = WantedServiceImpl::new(Arc::new(api));

        let quota = service.quota().await.unwrap();

        assert!(quota.payment_required);
    }
}
