use super::layout::Breakpoints;
use super::navigation::Page;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    #[serde(default)]
    pub layout: Breakpoints,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    /// Sidebar heading
    pub title: String,
    /// Page shown on load; `login` puts the login screen first
    #[serde(default)]
    pub start_page: Page,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    pub top_products_file: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            top_products_file: "top_products.csv".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[app]
title = "AgriTech Admin"
start_page = "login"

[layout]
sidebar_breakpoint = 768.0
small_device_breakpoint = 500.0

[export]
top_products_file = "top_products.csv"
"#;

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration
    ///
    /// Uses `override_toml` when given and valid, otherwise falls back to the
    /// embedded default config.
    pub fn load(override_toml: Option<&str>) -> Self {
        if let Some(contents) = override_toml {
            match Self::from_toml(contents) {
                Ok(config) => {
                    log::info!("Loaded page-provided configuration");
                    return config;
                }
                Err(e) => log::warn!("Ignoring page-provided configuration: {}", e),
            }
        }

        log::info!("Using default embedded configuration");
        Self::embedded()
    }

    fn embedded() -> Self {
        match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Embedded configuration is invalid: {}", e);
                Self::fallback()
            }
        }
    }

    fn fallback() -> Self {
        Self {
            app: AppSection {
                title: "AgriTech Admin".to_string(),
                start_page: Page::Login,
            },
            layout: Breakpoints::default(),
            export: ExportConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.app.title, "AgriTech Admin");
        assert_eq!(config.app.start_page, Page::Login);
        assert_eq!(config.layout, Breakpoints::default());
        assert_eq!(config.export.top_products_file, "top_products.csv");
        assert_eq!(config, AppConfig::fallback());
    }

    #[test]
    fn test_override_with_missing_sections() {
        let config = AppConfig::load(Some(
            r#"
            [app]
            title = "Farm Desk"
            start_page = "dashboard"
            "#,
        ));
        assert_eq!(config.app.title, "Farm Desk");
        assert_eq!(config.app.start_page, Page::Dashboard);
        assert_eq!(config.layout.sidebar_breakpoint, 768.0);
        assert_eq!(config.export.top_products_file, "top_products.csv");
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = AppConfig::load(Some("[app]\nstart_page = \"nowhere\""));
        assert_eq!(config, AppConfig::fallback());
    }

    #[test]
    fn test_no_override_uses_embedded() {
        assert_eq!(AppConfig::load(None), AppConfig::fallback());
    }
}
