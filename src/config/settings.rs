//! Application settings and configuration structures.

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use reqwest::Url;
use serde::Deserialize;

use crate::domain::Language;

/// Root configuration structure containing all client settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Remote REST API configuration
    pub api: ApiSettings,

    /// Local key/value storage (tokens and language code)
    pub storage: StorageSettings,

    /// Translation settings
    pub i18n: I18nSettings,

    /// Chat page polling
    pub chat: ChatSettings,

    /// Image attachment limits for the post-item wizard
    pub media: MediaSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Remote API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Base URL every endpoint path is joined onto (e.g. `http://localhost:8000/api`)
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Local storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// JSON file holding the persisted `access`, `refresh` and `lang` strings
    pub path: PathBuf,
}

/// Translation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct I18nSettings {
    /// Language used when storage holds no valid language code
    pub default_language: String,
}

/// Chat configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatSettings {
    /// Fixed polling interval in seconds
    pub poll_interval_secs: u64,
}

/// Image attachment limits.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaSettings {
    /// Maximum size of a single attached image in bytes (default: 5 MiB)
    pub max_image_bytes: u64,

    /// Maximum number of images on one listing
    pub max_images: usize,
}

/// Default API base, matching the marketplace backend's development server.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", DEFAULT_API_BASE)?
            .set_default("api.timeout_secs", 15)?
            .set_default("storage.path", ".campus-market/storage.json")?
            .set_default("i18n.default_language", "en")?
            .set_default("chat.poll_interval_secs", 5)?
            .set_default("media.max_image_bytes", 5_i64 * 1024 * 1024)?
            .set_default("media.max_images", 9)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__API__BASE_URL=http://... -> api.base_url
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.base_url", std::env::var("API_BASE").ok())?
            .set_override_option(
                "storage.path",
                std::env::var("CAMPUS_MARKET_STORAGE").ok(),
            )?
            .set_override_option(
                "i18n.default_language",
                std::env::var("CAMPUS_MARKET_LANG").ok(),
            )?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                settings.validate()?;
                Ok(settings)
            })
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.url()?;

        if self.chat.poll_interval_secs == 0 {
            return Err(ConfigError::Message(
                "chat.poll_interval_secs must be greater than zero".into(),
            ));
        }

        if Language::from_code(&self.i18n.default_language).is_none() {
            return Err(ConfigError::Message(format!(
                "i18n.default_language must be one of en, zh, th (got {:?})",
                self.i18n.default_language
            )));
        }

        Ok(())
    }

    /// Language to fall back on when storage holds nothing usable.
    pub fn default_language(&self) -> Language {
        Language::from_code(&self.i18n.default_language).unwrap_or_default()
    }
}

impl ApiSettings {
    /// Parse the base URL, forcing a trailing slash so relative joins keep the `/api` prefix.
    pub fn url(&self) -> Result<Url, ConfigError> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|e| {
            ConfigError::Message(format!("api.base_url {:?} is not a valid URL: {}", self.base_url, e))
        })
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl ChatSettings {
    /// Polling interval as a `Duration`.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings {
                base_url: DEFAULT_API_BASE.to_string(),
                timeout_secs: 15,
            },
            storage: StorageSettings {
                path: PathBuf::from(".campus-market/storage.json"),
            },
            i18n: I18nSettings {
                default_language: "en".to_string(),
            },
            chat: ChatSettings {
                poll_interval_secs: 5,
            },
            media: MediaSettings {
                max_image_bytes: 5 * 1024 * 1024,
                max_images: 9,
            },
            environment: "development".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_gets_trailing_slash() {
        let api = ApiSettings {
            base_url: "http://localhost:8000/api".into(),
            timeout_secs: 5,
        };

        let url = api.url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/");
        assert_eq!(url.join("items/").unwrap().as_str(), "http://localhost:8000/api/items/");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut settings = Settings::default();
        settings.api.base_url = "not a url".into();

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut settings = Settings::default();
        settings.chat.poll_interval_secs = 0;

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_unknown_default_language_rejected() {
        let mut settings = Settings::default();
        settings.i18n.default_language = "fr".into();

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.default_language(), Language::En);
        assert_eq!(settings.api.timeout(), Duration::from_secs(15));
    }
}
