//! Storage Module
//!
//! Local key/value storage for the handful of strings the client persists
//! between runs.
//!
//! This module provides:
//! - A `KeyValueStore` trait abstracting string storage
//! - A `MemoryStore` implementation for tests and ephemeral sessions
//! - A `FileStore` implementation backed by a JSON file
//! - The fixed key names the session and translator use
//!
//! # Architecture
//!
//! ```text
//! +-------------------+
//! | Session / i18n    |
//! +-------------------+
//!          |
//!          v
//! +-------------------+
//! | KeyValueStore     |  <-- Abstract interface
//! +-------------------+
//!      |         |
//!      v         v
//! MemoryStore  FileStore
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use campus_market::infrastructure::storage::{keys, FileStore, KeyValueStore};
//!
//! let store = FileStore::open(".campus-market/storage.json")?;
//! store.set(keys::LANGUAGE, "th")?;
//! assert_eq!(store.get(keys::LANGUAGE)?, Some("th".to_string()));
//! ```

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::shared::error::AppError;

/// Key names. Exactly these three strings are ever persisted.
pub mod keys {
    /// Bearer access token
    pub const ACCESS_TOKEN: &str = "access";
    /// Refresh token (may be absent)
    pub const REFRESH_TOKEN: &str = "refresh";
    /// Language code (`en`, `zh`, `th`)
    pub const LANGUAGE: &str = "lang";
}

/// Synchronous string storage.
///
/// Operations are cheap and local, so the trait is not async; callers in
/// async code use it directly.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. Missing keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Delete a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}
