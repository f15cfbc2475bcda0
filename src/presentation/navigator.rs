//! In-process navigation history.

use parking_lot::Mutex;
use tracing::debug;

use crate::application::services::Navigator;
use crate::domain::Route;

/// Records every navigation; the last entry is the current page.
#[derive(Debug)]
pub struct HistoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl HistoryNavigator {
    pub fn new(start: Route) -> Self {
        Self {
            history: Mutex::new(vec![start]),
        }
    }

    /// Every route visited so far, oldest first.
    pub fn history(&self) -> Vec<Route> {
        self.history.lock().clone()
    }

    /// Go back one page; the first page is never popped.
    pub fn back(&self) -> Route {
        let mut history = self.history.lock();
        if history.len() > 1 {
            history.pop();
        }
        history.last().cloned().unwrap_or(Route::Home)
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        debug!(path = %route, "Navigate");
        self.history.lock().push(route);
    }

    fn current(&self) -> Route {
        self.history.lock().last().cloned().unwrap_or(Route::Home)
    }
}
