//! # Domain Entities
//!
//! Records the client consumes from the marketplace API. The API owns and
//! persists all of them; the client only holds per-page snapshots.
//!
//! ## Core Entities
//!
//! - **User**: account and profile, plus the token pair issued at login
//! - **Item**: a listing for sale, trade, or barter
//! - **Cart / Wishlist / Order**: per-user records referencing items
//! - **ChatMessage**: a direct message between two users
//! - **Membership**: paid subscription unlocking featured listings
//! - **WantedItem**: a request-to-buy post
//!
//! ## Port Traits
//!
//! Each entity has an associated API trait defining the remote operations.
//! The traits are implemented over HTTP in the infrastructure layer,
//! following the dependency inversion principle.

mod user;
mod item;
mod cart;
mod wishlist;
mod order;
mod message;
mod membership;
mod wanted;

pub use user::{AuthApi, Credentials, ProfileUpdate, RegisteredAccount, Registration, TokenPair, User};

pub use item::{Condition, Item, ItemApi, ItemQuery, NewItem, SearchQuery};

pub use cart::{Cart, CartApi, CartLine, MAX_CART_QUANTITY, MIN_CART_QUANTITY};

pub use wishlist::{Wishlist, WishlistApi, WishlistEntry};

pub use order::{NewOrder, Order, OrderApi, OrderLine, OrderStatus};

pub use message::{ChatApi, ChatMessage, OutgoingMessage};

pub use membership::{
    Membership, MembershipApi, MAX_MEMBERSHIP_MONTHS, MIN_MEMBERSHIP_MONTHS, MONTHLY_FEE_CENTS,
};

pub use wanted::{ConditionPreference, NewWantedItem, PostInfo, WantedApi, WantedItem};

#[cfg(test)]
pub use user::MockAuthApi;
#[cfg(test)]
pub use item::MockItemApi;
#[cfg(test)]
pub use cart::MockCartApi;
#[cfg(test)]
pub use wishlist::MockWishlistApi;
#[cfg(test)]
pub use order::MockOrderApi;
#[cfg(test)]
pub use message::MockChatApi;
#[cfg(test)]
pub use membership::MockMembershipApi;
#[cfg(test)]
pub use wanted::MockWantedApi;
