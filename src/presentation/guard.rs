//! Route Guard
//!
//! Wraps pages that need a logged-in user. While the session is still being
//! resolved the page shows a loading state; an anonymous visitor is sent to
//! the login page exactly once per guard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::application::services::{Navigator, SessionStatus};
use crate::domain::{Route, User};

/// What a guarded page should do right now.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Loading,
    /// The visitor is anonymous and has been sent to this route
    Redirect(Route),
    Render(User),
}

pub struct RouteGuard {
    navigator: Arc<dyn Navigator>,
    redirected: AtomicBool,
}

impl RouteGuard {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            redirected: AtomicBool::new(false),
        }
    }

    /// Decide for one session state. Only the first anonymous evaluation
    /// navigates; later ones report the redirect without repeating it.
    pub fn evaluate(&self, status: &SessionStatus) -> GuardDecision {
        match status {
            SessionStatus::Unknown => GuardDecision::Loading,
            SessionStatus::Authenticated(user) => GuardDecision::Render(user.clone()),
            SessionStatus::Anonymous => {
                if !self.redirected.swap(true, Ordering::SeqCst) {
                    debug!(from = %self.navigator.current(), "Guard redirecting to login");
                    self.navigator.navigate(Route::Login);
                }
                GuardDecision::Redirect(Route::Login)
            }
        }
    }

    /// Wait until the session leaves `Unknown`, then decide.
    pub async fn resolve(
        &self,
        status: &mut tokio::sync::watch::Receiver<SessionStatus>,
    ) -> GuardDecision {
        let resolved = match status.wait_for(SessionStatus::is_resolved).await {
            Ok(current) => current.clone(),
            // Provider gone: nobody will ever log in through it.
            Err(_) => SessionStatus::Anonymous,
        };
        self.evaluate(&resolved)
    }

    pub fn has_redirected(&self) -> bool {
        self.redirected.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::navigator::HistoryNavigator;
    use std::time::Duration;
    use tokio::sync::watch;

    fn create_test_user() -> User {
        serde_json::from_value(serde_json::json!({"id": 7, "username": "somchai"})).unwrap()
    }

    fn create_test_guard() -> (Arc<HistoryNavigator>, RouteGuard) {
        let nav = Arc::new(HistoryNavigator::new(Route::Cart));
        let guard = RouteGuard::new(nav.clone());
        (nav, guard)
    }

    #[test]
    fn test_unknown_is_loading() {
        let (nav, guard) = create_test_guard();

        assert_eq!(guard.evaluate(&SessionStatus::Unknown), GuardDecision::Loading);
        assert_eq!(nav.history(), vec![Route::Cart]);
    }

    #[test]
    fn test_anonymous_redirects_once() {
        let (nav, guard) = create_test_guard();

        for _ in 0..3 {
            assert_eq!(
                guard.evaluate(&SessionStatus::Anonymous),
                GuardDecision::Redirect(Route::Login)
            );
        }

        assert_eq!(nav.history(), vec![Route::Cart, Route::Login]);
        assert!(guard.has_redirected());
    }

    #[test]
    fn test_authenticated_renders_with_user() {
        let (_, guard) = create_test_guard();
        let user = create_test_user();

        assert_eq!(
            guard.evaluate(&SessionStatus::Authenticated(user.clone())),
            GuardDecision::Render(user)
        );
    }

    #[tokio::test]
    async fn test_resolve_waits_for_session() {
        let (_, guard) = create_test_guard();
        let (tx, mut rx) = watch::channel(SessionStatus::Unknown);

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            tx.send_replace(SessionStatus::Authenticated(create_test_user()));
        });

        let decision = guard.resolve(&mut rx).await;
        assert!(matches!(decision, GuardDecision::Render(u) if u.id == 7));
    }

    #[tokio::test]
    async fn test_resolve_with_closed_channel_redirects() {
        let (nav, guard) = create_test_guard();
        let (tx, mut rx) = watch::channel(SessionStatus::Unknown);
        drop(tx);

        assert_eq!(guard.resolve(&mut rx).await, GuardDecision::Redirect(Route::Login));
        assert_eq!(nav.current(), Route::Login);
    }
}
