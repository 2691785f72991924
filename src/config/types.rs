use serde::Deserialize;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Catalog REST endpoints
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Custom keybindings
    #[serde(default)]
    pub keybindings: Option<KeybindingsConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Product and category endpoint URLs
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_products_url")]
    pub products: String,

    #[serde(default = "default_categories_url")]
    pub categories: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            products: default_products_url(),
            categories: default_categories_url(),
        }
    }
}

fn default_products_url() -> String {
    "https://fakestoreapi.com/products".to_string()
}

fn default_categories_url() -> String {
    "https://fakestoreapi.com/products/categories".to_string()
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("storefront/{}", env!("CARGO_PKG_VERSION"))
}

/// Keybinding configuration for remapping built-in actions
#[derive(Debug, Clone, Deserialize, Default)]
pub struct KeybindingsConfig {
    #[serde(default)]
    pub quit: Option<String>,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub toggle_theme: Option<String>,
    #[serde(default)]
    pub increment: Option<String>,
    #[serde(default)]
    pub reload: Option<String>,
    #[serde(default)]
    pub cancel: Option<String>,

    // Navigation
    #[serde(default)]
    pub move_up: Option<String>,
    #[serde(default)]
    pub move_down: Option<String>,
    #[serde(default)]
    pub toggle_focus: Option<String>,
    #[serde(default)]
    pub select: Option<String>,
}

impl KeybindingsConfig {
    /// All configured remaps as (action name, key string) pairs
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("quit", &self.quit),
            ("help", &self.help),
            ("toggle_theme", &self.toggle_theme),
            ("increment", &self.increment),
            ("reload", &self.reload),
            ("cancel", &self.cancel),
            ("move_up", &self.move_up),
            ("move_down", &self.move_down),
            ("toggle_focus", &self.toggle_focus),
            ("select", &self.select),
        ]
        .into_iter()
        .filter_map(|(name, key)| key.as_deref().map(|k| (name, k)))
        .collect()
    }
}

/// File logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// Log file path (supports ~ expansion)
    /// Default: /tmp/storefront.log
    #[serde(default = "default_log_file")]
    pub file: String,

    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_logging_enabled() -> bool {
    true
}

fn default_log_file() -> String {
    "/tmp/storefront.log".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: Config = serde_yml::from_str("{}").unwrap();
        assert_eq!(config.endpoints.products, "https://fakestoreapi.com/products");
        assert_eq!(
            config.endpoints.categories,
            "https://fakestoreapi.com/products/categories"
        );
        assert_eq!(config.http.timeout(), Duration::from_secs(10));
        assert!(config.keybindings.is_none());
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let yaml = r#"
endpoints:
  products: http://localhost:8080/products
http:
  timeout_secs: 3
keybindings:
  toggle_theme: F2
logging:
  enabled: false
"#;
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.endpoints.products, "http://localhost:8080/products");
        assert_eq!(
            config.endpoints.categories,
            "https://fakestoreapi.com/products/categories"
        );
        assert_eq!(config.http.timeout_secs, 3);
        assert!(config.http.user_agent.starts_with("storefront/"));
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.file, "/tmp/storefront.log");

        let keys = config.keybindings.unwrap();
        assert_eq!(keys.entries(), vec![("toggle_theme", "F2")]);
    }
}
