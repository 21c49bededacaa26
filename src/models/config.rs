//! Application configuration structures.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::pipeline::{IdentityStrategy, MergePolicy};

/// Environment variables that override the account section.
pub const USERNAME_ENV: &str = "ZXIN_USERNAME";
pub const PASSWORD_ENV: &str = "ZXIN_PASSWORD";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Portal API connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Login credentials
    #[serde(default)]
    pub account: AccountConfig,

    /// Deadline scan behavior
    #[serde(default)]
    pub scan: ScanConfig,

    /// Notification delivery
    #[serde(default)]
    pub notify: NotifyConfig,

    /// Output locations
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Apply credential overrides from the environment.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(username) = env::var(USERNAME_ENV) {
            self.account.username = username;
        }
        if let Ok(password) = env::var(PASSWORD_ENV) {
            self.account.password = password;
        }
        self
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::validation("api.base_url is empty"));
        }
        Url::parse(&self.api.base_url)
            .map_err(|e| AppError::validation(format!("api.base_url is invalid: {e}")))?;
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        ScanConfig::check_threshold_days(self.scan.threshold_days)?;
        if !(-12..=14).contains(&self.scan.utc_offset_hours) {
            return Err(AppError::validation(
                "scan.utc_offset_hours must be within -12..=14",
            ));
        }
        if let Some(webhook) = &self.notify.webhook_url {
            Url::parse(webhook)
                .map_err(|e| AppError::validation(format!("notify.webhook_url is invalid: {e}")))?;
        }
        if self.notify.timeout_secs == 0 {
            return Err(AppError::validation("notify.timeout_secs must be > 0"));
        }
        Ok(())
    }

    /// Whether both username and password are set.
    pub fn has_credentials(&self) -> bool {
        !self.account.username.is_empty() && !self.account.password.is_empty()
    }
}

/// Portal API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the portal API
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Accept-Language header sent with API calls
    #[serde(default = "defaults::accept_language")]
    pub accept_language: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            accept_language: defaults::accept_language(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Login credentials. Prefer the environment for the password.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Deadline scan behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Days before a deadline at which unsubmitted work counts as upcoming
    #[serde(default = "defaults::threshold_days")]
    pub threshold_days: f64,

    /// Reference timezone as whole hours east of UTC
    #[serde(default = "defaults::utc_offset_hours")]
    pub utc_offset_hours: i32,

    /// How the known-id set is updated at the end of a scan
    #[serde(default)]
    pub merge_policy: MergePolicy,

    /// How ids are synthesized for homework without a server id
    #[serde(default)]
    pub identity: IdentityStrategy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            threshold_days: defaults::threshold_days(),
            utc_offset_hours: defaults::utc_offset_hours(),
            merge_policy: MergePolicy::default(),
            identity: IdentityStrategy::default(),
        }
    }
}

impl ScanConfig {
    /// Accept a threshold only if it is finite and non-negative.
    pub fn check_threshold_days(days: f64) -> Result<f64> {
        if !days.is_finite() || days < 0.0 {
            return Err(AppError::validation(format!(
                "scan.threshold_days must be a finite number >= 0, got {days}"
            )));
        }
        Ok(days)
    }
}

/// Notification delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Chat webhook; notifications only go to the log when unset
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// Webhook request timeout in seconds
    #[serde(default = "defaults::notify_timeout")]
    pub timeout_secs: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: defaults::notify_timeout(),
        }
    }
}

/// Output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory receiving JSON documents
    #[serde(default = "defaults::output")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            output: defaults::output(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn base_url() -> String {
        "https://v2.api.z-xin.net".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; zxin-tools/0.1)".into()
    }
    pub fn accept_language() -> String {
        "zh-CN,zh;q=0.9,en;q=0.8,en-GB;q=0.7,en-US;q=0.6".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn threshold_days() -> f64 {
        3.0
    }
    pub fn utc_offset_hours() -> i32 {
        8
    }
    pub fn notify_timeout() -> u64 {
        10
    }
    pub fn output() -> PathBuf {
        PathBuf::from("output")
    }
}
