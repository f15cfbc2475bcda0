//! Membership Service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use validator::Validate;

use crate::application::dto::MembershipForm;
use crate::domain::{Membership, MembershipApi, Price};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// Membership service trait
#[async_trait]
pub trait MembershipService: Send + Sync {
    async fn status(&self) -> Result<Membership, AppError>;

    /// Buy or extend a membership.
    async fn purchase(&self, form: &MembershipForm) -> Result<Membership, AppError>;

    /// Price shown before purchase.
    fn quote(&self, months: u32) -> Price {
        Membership::quote(months)
    }
}

/// MembershipService implementation
pub struct MembershipServiceImpl<M: MembershipApi> {
    api: Arc<M>,
}

impl<M: MembershipApi> MembershipServiceImpl<M> {
    pub fn new(api: Arc<M>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<M: MembershipApi + 'static> MembershipService for MembershipServiceImpl<M> {
    async fn status(&self) -> Result<Membership, AppError> {
        self.api.membership().await
    }

    async fn purchase(&self, form: &MembershipForm) -> Result<Membership, AppError> {
        form.validate()
            .map_err(|e| AppError::Validation(validation_error(&e)))?;

        let membership = self.api.purchase_membership(form.months).await?;
        info!(
            months = form.months,
            end_date = ?membership.end_date,
            "Membership purchased"
        );
        Ok(membership)
    }
}
