//! # Value Objects
//!
//! Immutable value types shared by entities and pages.

mod language;
mod price;
mod route;

pub use language::Language;
pub use price::{InvalidPrice, Price};
pub use route::Route;
