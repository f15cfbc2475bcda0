//! Client routes.
//!
//! Every page the client can show, with the path the browser client used for
//! it. Navigation (logout, guard redirects, checkout) is expressed in routes.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Featured,
    Barter,
    Search(Option<String>),
    Item(i64),
    NewItem,
    Cart,
    Orders,
    NewOrder,
    Wishlist,
    Chat,
    Wanted,
    NewWanted,
    Personal,
    Login,
    Register,
}

impl Route {
    /// Path of the route, including the search query when present.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Featured => "/featured".into(),
            Route::Barter => "/barter".into(),
            Route::Search(None) => "/search".into(),
            Route::Search(Some(q)) => format!("/search?q={}", q),
            Route::Item(id) => format!("/items/{}", id),
            Route::NewItem => "/items/new".into(),
            Route::Cart => "/cart".into(),
            Route::Orders => "/orders".into(),
            Route::NewOrder => "/orders/new".into(),
            Route::Wishlist => "/wishlist".into(),
            Route::Chat => "/chat".into(),
            Route::Wanted => "/wanted".into(),
            Route::NewWanted => "/wanted/new".into(),
            Route::Personal => "/personal".into(),
            Route::Login => "/login".into(),
            Route::Register => "/register".into(),
        }
    }

    /// Whether the page sits behind the route guard.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::NewItem
                | Route::Cart
                | Route::Orders
                | Route::NewOrder
                | Route::Wishlist
                | Route::Chat
                | Route::NewWanted
                | Route::Personal
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
