//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults run the dashboard locally against
//! fixture data.
//!
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ADMIN_BASE_URL` - Public URL for the dashboard (default: http://localhost:3001)
//! - `BACKEND_URL` - External customer/shop backend (default: http://localhost:3000)
//! - `ADMIN_DATA_SOURCE` - `fixture` or `remote` (default: fixture)
//! - `ADMIN_SHOP_CATEGORIES` - Shop category filter options, comma separated,
//!   each `value` or `value=label`
//! - `ADMIN_ROUTER_BASE` - Prefix for view/update navigation links (default: empty)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` / `SENTRY_TRACES_SAMPLE_RATE` - 0.0 to 1.0 (default: 1.0)
//!
//! The category list is not derived from the data. It has to be kept in sync
//! with the shop types the backend actually returns; see
//! [`crate::sources::missing_categories`].

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;
use url::Url;

use crate::components::data_table::FilterOption;

/// Default shop category filter options.
///
/// "Electronics" is deliberately absent: it is what the filter has always
/// offered, and the fixture's Electronics shop is reported at startup instead.
pub const DEFAULT_SHOP_CATEGORIES: &str =
    "General=General Shop,Medical,Footwear,Electrical,Clothes";

const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where list screens get their records from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSourceKind {
    /// Built-in sample data.
    #[default]
    Fixture,
    /// The external backend (`GET /getAllCustomers`, `GET /getAllShops`).
    Remote,
}

impl FromStr for DataSourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixture" => Ok(Self::Fixture),
            "remote" => Ok(Self::Remote),
            other => Err(format!("expected `fixture` or `remote`, got `{other}`")),
        }
    }
}

/// External backend configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the dashboard
    pub base_url: String,
    /// External backend
    pub backend: BackendConfig,
    /// Record source for list screens
    pub data_source: DataSourceKind,
    /// Options offered by the shop category filter
    pub shop_categories: Vec<FilterOption>,
    /// Prefix for links handed to the external router
    pub router_base: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let host = env
            .or_default("ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), e.to_string()))?;
        let port = env
            .or_default("ADMIN_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), e.to_string()))?;
        let base_url = env.or_default("ADMIN_BASE_URL", "http://localhost:3001");
        let backend = BackendConfig::from_env(&env)?;
        let data_source = env
            .or_default("ADMIN_DATA_SOURCE", "fixture")
            .parse::<DataSourceKind>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_DATA_SOURCE".to_string(), e))?;
        let shop_categories = parse_categories(
            &env.or_default("ADMIN_SHOP_CATEGORIES", DEFAULT_SHOP_CATEGORIES),
        )?;
        let router_base = env
            .or_default("ADMIN_ROUTER_BASE", "")
            .trim_end_matches('/')
            .to_string();
        let sentry_dsn = env.optional("SENTRY_DSN");
        let sentry_environment = env.optional("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = env
            .optional("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = env
            .optional("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            base_url,
            backend,
            data_source,
            shop_categories,
            router_base,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the dashboard is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl BackendConfig {
    fn from_env<F>(env: &Env<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = env.or_default("BACKEND_URL", DEFAULT_BACKEND_URL);
        let url = Url::parse(&raw)
            .map_err(|e| ConfigError::InvalidEnvVar("BACKEND_URL".to_string(), e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                "BACKEND_URL".to_string(),
                format!("unsupported scheme `{}`", url.scheme()),
            ));
        }

        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable lookup with the defaulting helpers config loading needs.
struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional variable; blank values count as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }
}

/// Parse `value[=label],value[=label],...` into filter options.
fn parse_categories(raw: &str) -> Result<Vec<FilterOption>, ConfigError> {
    let options: Vec<FilterOption> = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((value, label)) => FilterOption::new(value.trim(), label.trim()),
            None => FilterOption::new(entry, entry),
        })
        .collect();

    if options.iter().any(|o| o.value.is_empty()) {
        return Err(ConfigError::InvalidEnvVar(
            "ADMIN_SHOP_CATEGORIES".to_string(),
            "category values cannot be empty".to_string(),
        ));
    }
    if options.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            "ADMIN_SHOP_CATEGORIES".to_string(),
            "at least one category is required".to_string(),
        ));
    }

    Ok(options)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AdminConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AdminConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3001");
        assert_eq!(config.backend.base_url, "http://localhost:3000");
        assert_eq!(config.data_source, DataSourceKind::Fixture);
        assert_eq!(config.router_base, "");
        assert!(!config.is_secure());
        assert!(config.sentry_dsn.is_none());
        assert!((config.sentry_sample_rate - 1.0).abs() < f32::EPSILON);

        let values: Vec<&str> = config
            .shop_categories
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(
            values,
            vec!["General", "Medical", "Footwear", "Electrical", "Clothes"]
        );
        assert_eq!(config.shop_categories[0].label, "General Shop");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ADMIN_HOST", "0.0.0.0"),
            ("ADMIN_PORT", "8080"),
            ("ADMIN_BASE_URL", "https://admin.example.com"),
            ("BACKEND_URL", "https://api.example.com/v1/"),
            ("ADMIN_DATA_SOURCE", "remote"),
            ("ADMIN_SHOP_CATEGORIES", "General, Electronics=Gadgets ,"),
            ("ADMIN_ROUTER_BASE", "https://app.example.com/"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert!(config.is_secure());
        assert_eq!(config.backend.base_url, "https://api.example.com/v1");
        assert_eq!(config.data_source, DataSourceKind::Remote);
        assert_eq!(config.router_base, "https://app.example.com");
        assert_eq!(config.shop_categories.len(), 2);
        assert_eq!(config.shop_categories[1].value, "Electronics");
        assert_eq!(config.shop_categories[1].label, "Gadgets");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = load(&[("ADMIN_PORT", "  "), ("SENTRY_DSN", "")]).unwrap();
        assert_eq!(config.port, 3001);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("ADMIN_PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "ADMIN_PORT"));
    }

    #[test]
    fn test_invalid_data_source() {
        let err = load(&[("ADMIN_DATA_SOURCE", "database")]).unwrap_err();
        assert!(err.to_string().contains("ADMIN_DATA_SOURCE"));
    }

    #[test]
    fn test_invalid_backend_url() {
        assert!(load(&[("BACKEND_URL", "not a url")]).is_err());
        assert!(load(&[("BACKEND_URL", "ftp://files.example.com")]).is_err());
    }

    #[test]
    fn test_empty_category_value_rejected() {
        let err = load(&[("ADMIN_SHOP_CATEGORIES", "=Nameless")]).unwrap_err();
        assert!(err.to_string().contains("ADMIN_SHOP_CATEGORIES"));
    }
}
