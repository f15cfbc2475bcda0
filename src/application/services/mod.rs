//! Application Services
//!
//! Page-facing logic on top of the API ports.
//!
//! ## Available Services
//!
//! - **SessionProvider**: login, registration, logout and the current user
//! - **CatalogService**: home feed, listings, item detail, search, posting
//! - **CartService**: cart lines and quantities
//! - **WishlistService**: saved items
//! - **OrderService**: checkout, history and cancellation
//! - **ChatService**: direct messages, plus the background `ChatPoller`
//! - **MembershipService**: membership status and purchase
//! - **WantedService**: request-to-buy posts and the free-post quota

pub mod navigation;
pub mod session;
pub mod catalog_service;
pub mod cart_service;
pub mod wishlist_service;
pub mod order_service;
pub mod chat_service;
pub mod membership_service;
pub mod wanted_service;

pub use navigation::Navigator;

// Re-export session types
pub use session::{AuthError, RegisterOutcome, SessionProvider, SessionStatus};

// Re-export service types
pub use catalog_service::{
    CatalogService, CatalogServiceImpl, HOME_BARTER_LIMIT, HOME_FEATURED_LIMIT, HOME_LATEST_LIMIT,
};
pub use cart_service::{CartService, CartServiceImpl};
pub use wishlist_service::{WishlistService, WishlistServiceImpl};
pub use order_service::{OrderService, OrderServiceImpl};
pub use chat_service::{ChatPoller, ChatService, ChatServiceImpl, ChatSnapshot};
pub use membership_service::{MembershipService, MembershipServiceImpl};
pub use wanted_service::{WantedService, WantedServiceImpl};
