//! Page scope
//!
//! Ties in-flight requests to the lifetime of the page that started them.
//! Dropping the scope cancels every request still running through it, so a
//! late response can never update a page that is gone.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::Route;
use crate::shared::error::AppError;

pub struct PageScope {
    route: Route,
    token: CancellationToken,
}

impl PageScope {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            token: CancellationToken::new(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Token for work that outlives a single call, such as a poller.
    pub fn child_token(&self) -> CancellationToken {
        self.token.child_token()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel everything started through this scope.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Run `fut` unless the scope is cancelled first.
    pub async fn run<T, F>(&self, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                debug!(page = %self.route, "Request cancelled with its page");
                Err(AppError::Cancelled)
            }
            result = fut => result,
        }
    }

    /// Detached variant of [`PageScope::run`] for spawned tasks.
    pub fn guard<T, F>(&self, fut: F) -> impl Future<Output = Result<T, AppError>> + Send + 'static
    where
        T: Send + 'static,
        F: Future<Output = Result<T, AppError>> + Send + 'static,
    {
        let token = self.token.child_token();
        async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => Err(AppError::Cancelled),
                result = fut => result,
            }
        }
    }
}

impl Drop for PageScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
