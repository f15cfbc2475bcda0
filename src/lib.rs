//! # Campus Market Client Library
//!
//! Client for the campus second-hand marketplace REST API:
//! - Listings, search, featured and barter feeds
//! - Cart, wishlist, orders and membership
//! - Direct messages with background polling
//! - Request-to-buy (wanted) posts
//! - English, Chinese and Thai translations
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, value objects and the API port traits
//! - **Application Layer**: Session provider, page services and DTOs
//! - **Infrastructure Layer**: HTTP implementations of the ports, local storage
//! - **Presentation Layer**: Terminal pages, route guard, page scopes
//!
//! ## Module Structure
//!
//! ```text
//! campus_market/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, port traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ HTTP client and key/value storage
//! +-- i18n/           Translation dictionaries
//! +-- presentation/   CLI pages, guard, wizard
//! +-- shared/         Errors and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business types
pub mod domain;

// Application layer - Page-facing services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Translations
pub mod i18n;

// Presentation layer - Terminal pages
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and wiring
pub mod startup;

// Telemetry and observability
pub mod telemetry;
