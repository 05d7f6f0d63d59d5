//! Application configuration
//!
//! Loaded from a YAML file. Every section is optional and falls back to
//! its defaults, so an empty file is a valid configuration.

use crate::error::{Error, Result};
use crate::types::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Pagination control defaults
    #[serde(default)]
    pub pagination: PaginationSettings,

    /// Listing catalogue source
    #[serde(default)]
    pub catalog: CatalogSettings,
}

impl AppConfig {
    /// Parse configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml maps an empty document to unit, not to an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {e}")))?;
        Self::from_yaml_str(&content)
    }

    /// Check values serde cannot constrain
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::invalid_value("server.port", "must be greater than 0"));
        }
        if self.pagination.items_per_page == 0 {
            return Err(Error::invalid_value(
                "pagination.items_per_page",
                "must be greater than 0",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Server
// ============================================================================

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

// ============================================================================
// Pagination
// ============================================================================

/// Defaults for the rendered pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSettings {
    /// Listings per page
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// Show the "Showing X to Y of Z" text
    #[serde(default = "default_show_info")]
    pub show_info: bool,

    /// Control theme
    #[serde(default)]
    pub theme: Theme,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            show_info: default_show_info(),
            theme: Theme::default(),
        }
    }
}

fn default_items_per_page() -> usize {
    9
}

fn default_show_info() -> bool {
    true
}

// ============================================================================
// Catalog
// ============================================================================

/// Where listings come from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Listings YAML file; the built-in listings are used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_yaml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.pagination.items_per_page, 9);
        assert!(config.pagination.show_info);
        assert_eq!(config.pagination.theme, Theme::Light);
        assert_eq!(config.catalog.path, None);
    }

    #[test]
    fn test_partial_sections() {
        let yaml = r"
server:
  port: 3000
pagination:
  theme: dark
  show_info: false
";
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.pagination.items_per_page, 9);
        assert!(!config.pagination.show_info);
        assert_eq!(config.pagination.theme, Theme::Dark);
    }

    #[test]
    fn test_rejects_zero_items_per_page() {
        let err = AppConfig::from_yaml_str("pagination:\n  items_per_page: 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "pagination.items_per_page"));
    }

    #[test]
    fn test_rejects_zero_port() {
        let err = AppConfig::from_yaml_str("server:\n  port: 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "server.port"));
    }

    #[test]
    fn test_rejects_unknown_theme() {
        let err = AppConfig::from_yaml_str("pagination:\n  theme: sepia\n").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "catalog:\n  path: /srv/listings.yaml").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(
            config.catalog.path,
            Some(PathBuf::from("/srv/listings.yaml"))
        );
    }

    #[test]
    fn test_from_missing_file() {
        let err = AppConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
