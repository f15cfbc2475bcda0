//! HTTP Implementations
//!
//! `reqwest` implementations of the domain port traits.
//!
//! All ports share one [`ApiClient`]; each module below maps one group of
//! endpoints onto its trait.
//!
//! ## Available Implementations
//!
//! - **AuthApi** - `users/token/`, `users/register/`, `users/profile/`
//! - **ItemApi** - `items/`, `search/items/`
//! - **CartApi** - `cart/`
//! - **WishlistApi** - `wishlist/`
//! - **OrderApi** - `orders/`
//! - **ChatApi** - `chat/messages/`
//! - **MembershipApi** - `users/membership/`
//! - **WantedApi** - `wanted/`

mod client;

mod auth;
mod cart;
mod chat;
mod items;
mod membership;
mod orders;
mod wanted;
mod wishlist;

pub use client::{ApiClient, AuthMode, REQUEST_ID_HEADER};

use serde::Deserialize;

/// List payload. Endpoints answer either a bare array or a paginated
/// `{"results": [...]}` object depending on server configuration.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Listing<T> {
    Plain(Vec<T>),
    Paged { results: Vec<T> },
}

impl<T> Listing<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Plain(items) => items,
            Listing::Paged { results } => results,
        }
    }
}
