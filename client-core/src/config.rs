//! Configuration for the client core.
//!
//! Loads settings from:
//! 1. Environment variables
//! 2. .env file (local development)
//!
//! Every setting has a default so the core runs with zero configuration;
//! the env vars exist for tweaking the simulated backend and the storage
//! location.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub auth: AuthSettings,
    pub stream: StreamSettings,
    pub storage: StorageSettings,
}

impl Settings {
    /// Load settings from environment variables (with .env support).
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        Ok(Settings {
            api: ApiSettings::from_env()?,
            auth: AuthSettings::from_env()?,
            stream: StreamSettings::from_env()?,
            storage: StorageSettings::from_env(),
        })
    }
}

impl Default for Settings {
    /// Built-in defaults, ignoring the environment. Used by tests.
    fn default() -> Self {
        Settings {
            api: ApiSettings::default(),
            auth: AuthSettings::default(),
            stream: StreamSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

/// Simulated API behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Artificial delay applied to every simulated backend call, in ms
    pub mock_delay_ms: u64,
}

impl ApiSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            mock_delay_ms: env::var("MOCK_API_DELAY_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .context("Invalid MOCK_API_DELAY_MS")?,
        })
    }

    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self { mock_delay_ms: 1000 }
    }
}

/// Credential limits
///
/// Username and email shape live in `validators`; only the password minimum
/// is tunable because it is a placeholder for real verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    pub min_password_length: usize,
}

impl AuthSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            min_password_length: env::var("AUTH_MIN_PASSWORD_LENGTH")
                .unwrap_or_else(|_| "6".to_string())
                .parse()
                .context("Invalid AUTH_MIN_PASSWORD_LENGTH")?,
        })
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            min_password_length: 6,
        }
    }
}

/// Stream metadata limits and directory view sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamSettings {
    pub max_title_length: usize,
    pub max_description_length: usize,
    /// Number of streams in the featured rail (top by viewer count)
    pub featured_limit: usize,
    /// Number of streams in the trending rail (most recently started)
    pub trending_limit: usize,
    pub default_thumbnail_url: String,
}

impl StreamSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            max_title_length: env::var("STREAM_MAX_TITLE_LENGTH")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .context("Invalid STREAM_MAX_TITLE_LENGTH")?,
            max_description_length: env::var("STREAM_MAX_DESCRIPTION_LENGTH")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .context("Invalid STREAM_MAX_DESCRIPTION_LENGTH")?,
            featured_limit: env::var("STREAM_FEATURED_LIMIT")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .context("Invalid STREAM_FEATURED_LIMIT")?,
            trending_limit: env::var("STREAM_TRENDING_LIMIT")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("Invalid STREAM_TRENDING_LIMIT")?,
            default_thumbnail_url: env::var("STREAM_DEFAULT_THUMBNAIL_URL")
                .unwrap_or_else(|_| "https://via.placeholder.com/1280x720".to_string()),
        })
    }
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            max_title_length: 100,
            max_description_length: 500,
            featured_limit: 3,
            trending_limit: 5,
            default_thumbnail_url: "https://via.placeholder.com/1280x720".to_string(),
        }
    }
}

/// Durable storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Path of the JSON store file. Unset selects the in-memory store.
    pub path: Option<String>,
    /// Key holding the serialized signed-in user
    pub user_key: String,
    /// Key holding the opaque session token
    pub token_key: String,
}

impl StorageSettings {
    fn from_env() -> Self {
        Self {
            path: env::var("STORAGE_PATH").ok(),
            user_key: env::var("STORAGE_USER_KEY").unwrap_or_else(|_| "user".to_string()),
            token_key: env::var("STORAGE_TOKEN_KEY")
                .unwrap_or_else(|_| "auth_token".to_string()),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: None,
            user_key: "user".to_string(),
            token_key: "auth_token".to_string(),
        }
    }
}
