//! # Domain Layer
//!
//! Entities the marketplace API serves, the port traits describing the
//! remote operations on them, and small value objects.
//!
//! ## Structure
//!
//! - **entities**: User, Item, Cart, Wishlist, Order, ChatMessage, Membership, WantedItem
//! - **value_objects**: Language, Price, Route
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Port traits define the remote contract; HTTP lives elsewhere

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
