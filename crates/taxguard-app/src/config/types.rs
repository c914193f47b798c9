//! Configuration types for taxguard
//!
//! Defines:
//! - `Settings` - Contents of `config.toml`
//! - `ServiceSettings` - Where and how to reach the prediction service
//! - `UiSettings` - Form presets

use std::time::Duration;

use serde::{Deserialize, Serialize};
use taxguard_core::ModelType;

/// Shortest request timeout accepted from any source
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// `[service]` section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceSettings {
    /// Base address; `/predict` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServiceSettings {
    /// Request timeout, never below one second
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(MIN_TIMEOUT_SECS))
    }
}

fn default_base_url() -> String {
    taxguard_client::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    taxguard_client::DEFAULT_TIMEOUT.as_secs()
}

/// `[ui]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Model pre-selected on a fresh detection form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<ModelType>,
}

/// Values given on the command line; `None` means "not given"
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub timeout_secs: Option<u64>,
}
