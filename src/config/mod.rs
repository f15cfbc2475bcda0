//! # Configuration Module
//!
//! This module handles client configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__, plus `API_BASE`)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use campus_market::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Talking to {}", settings.api.base_url);
//! ```

mod settings;

pub use settings::*;
