//! Navigation port.
//!
//! Services that change pages (logout, route guard, checkout) go through
//! this trait instead of touching the front end directly.

use crate::domain::Route;

#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Move to `route`.
    fn navigate(&self, route: Route);

    /// The page currently shown.
    fn current(&self) -> Route;
}
