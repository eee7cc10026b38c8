//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPIFY_STORE` - Shopify store domain (e.g., your-store.myshopify.com)
//! - `SHOPIFY_API_KEY` - Admin API access token (HIGH PRIVILEGE)
//!
//! ## Optional
//! - `SHOPIFY_API_VERSION` - API version filled into `{api_version}` when a
//!   caller omits it (default: 2025-01)
//! - `SHOPIFY_BASE_URL` - Override for `https://{store}` (proxies, tests)
//! - `SHOPIFY_REQUEST_TIMEOUT_SECS` - Per-request timeout; unset means no timeout

use std::collections::HashMap;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

/// Default Admin API version.
pub const DEFAULT_API_VERSION: &str = "2025-01";

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Shopify Admin REST client configuration.
///
/// Implements `Debug` manually to redact the HIGH PRIVILEGE access token.
#[derive(Clone)]
pub struct ShopifyConfig {
    /// Shopify store domain (e.g., your-store.myshopify.com)
    pub store: String,
    /// Admin API access token, sent as `X-Shopify-Access-Token`
    pub api_key: SecretString,
    /// Admin API version (e.g., 2025-01)
    pub api_version: String,
    /// Explicit base URL, replacing `https://{store}`
    pub base_url: Option<String>,
    /// Transport timeout; `None` leaves timing to the caller
    pub request_timeout: Option<Duration>,
}

impl std::fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("store", &self.store)
            .field("api_key", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ShopifyConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = get_required(&lookup, "SHOPIFY_STORE")?;
        if store.trim().is_empty() || store.contains("://") {
            return Err(ConfigError::InvalidEnvVar(
                "SHOPIFY_STORE".to_string(),
                "expected a bare domain such as your-store.myshopify.com".to_string(),
            ));
        }

        let api_key = get_required(&lookup, "SHOPIFY_API_KEY")?;
        // Tokens are issued by Shopify, so a weak-looking one is only worth a warning
        if let Err(e) = validate_secret_strength(&api_key, "SHOPIFY_API_KEY") {
            tracing::warn!("SHOPIFY_API_KEY validation warning: {e}");
        }

        let request_timeout = lookup("SHOPIFY_REQUEST_TIMEOUT_SECS")
            .map(|raw| {
                raw.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "SHOPIFY_REQUEST_TIMEOUT_SECS".to_string(),
                        e.to_string(),
                    )
                })
            })
            .transpose()?;

        let config = Self {
            store,
            api_key: SecretString::from(api_key),
            api_version: lookup("SHOPIFY_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            base_url: lookup("SHOPIFY_BASE_URL"),
            request_timeout,
        };

        // Fail fast on an unusable base URL
        config.base_url()?;
        Ok(config)
    }

    /// Base URL requests are resolved against.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the URL does not parse.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        match &self.base_url {
            Some(raw) => Url::parse(raw).map_err(|e| {
                ConfigError::InvalidEnvVar("SHOPIFY_BASE_URL".to_string(), e.to_string())
            }),
            None => Url::parse(&format!("https://{}", self.store.trim_end_matches('/'))).map_err(
                |e| ConfigError::InvalidEnvVar("SHOPIFY_STORE".to_string(), e.to_string()),
            ),
        }
    }

    /// Access token for the transport.
    #[must_use]
    pub fn access_token(&self) -> &str {
        self.api_key.expose_secret()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required variable through `lookup`.
fn get_required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}
