//! Configuration module for the catalog importer

use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};
use std::path::PathBuf;

/// Production host of the Golden Leaf store API
pub const DEFAULT_BASE_URL: &str = "https://golden-leaf.herokuapp.com";

/// Main application settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub logging: LoggingSettings,
}

/// Catalog API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Scheme and host of the catalog API
    pub base_url: String,
    /// Percent-encode category ids instead of substituting them verbatim
    pub encode_category: bool,
    pub user_agent: String,
}

/// Log output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directives, overridden by `RUST_LOG`
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables (prefixed with GOLDEN_LEAF_)
    /// 2. config/local.toml (gitignored)
    /// 3. config/default.toml
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = std::env::var("CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"));

        Self::load_from(config_dir)
    }

    /// Load configuration rooted at a specific directory
    pub fn load_from(config_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let config_dir = config_dir.into();

        let builder = Config::builder()
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            // GOLDEN_LEAF_CATALOG__BASE_URL, etc.
            .add_source(
                Environment::with_prefix("GOLDEN_LEAF")
                    .separator("__")
                    .try_parsing(true)
            );

        builder.build()?.try_deserialize()
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            base_url: DEFAULT_BASE_URL.to_string(),
            encode_category: false,
            user_agent: concat!("golden-leaf-catalog/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: "golden_leaf_catalog=info".to_string(),
            json: true,
        }
    }
}
