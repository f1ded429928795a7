//! # Configuration State
//!
//! Stores session configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`URBAN_*`)
//! 2. Config file (`URBAN_CONFIG`, else the platform config dir `config.toml`)
//! 3. Defaults (this file)
//!
//! ```toml
//! # config.toml
//! store_name = "Urban Lunch"
//! admin_pin = "7654"
//! clear_cart_on_checkout = false
//! image_base_url = "https://cdn.urban-lunch.ru/menu/"
//! catalog_path = "/srv/urban/catalog.json"
//! ```
//!
//! Configuration is read-only once the session starts.

use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use urban_core::{Money, MINOR_UNITS_PER_RUBLE};

use crate::error::{AppError, AppResult};

/// Env var naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "URBAN_CONFIG";

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Shown in the web view header
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Kopecks per ruble; order amounts are sent in minor units
    pub minor_units_per_major: i64,

    /// PIN that turns on admin mode
    pub admin_pin: String,

    /// Empty the cart after a successful order hand-off
    pub clear_cart_on_checkout: bool,

    /// Prefix for relative product image names
    pub image_base_url: Option<String>,

    /// Catalog JSON file; the embedded sample menu is used when unset
    pub catalog_path: Option<PathBuf>,

    /// Default tracing directive, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        ConfigState {
            store_name: "Urban Lunch".to_string(),
            currency_symbol: "₽".to_string(),
            minor_units_per_major: MINOR_UNITS_PER_RUBLE,
            admin_pin: "7654".to_string(),
            clear_cart_on_checkout: false,
            image_base_url: Some("https://cdn.urban-lunch.ru/menu/".to_string()),
            catalog_path: None,
            log_filter: "info,urban_core=debug,urban_miniapp_lib=debug".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| AppError::ConfigLoadFailed(e.to_string()))?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; absent keys keep their defaults.
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `URBAN_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("URBAN_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(pin) = lookup("URBAN_ADMIN_PIN") {
            debug!("Overriding admin PIN from environment");
            self.admin_pin = pin;
        }

        if let Some(path) = lookup("URBAN_CATALOG_PATH") {
            debug!(path = %path, "Overriding catalog path from environment");
            self.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(url) = lookup("URBAN_IMAGE_BASE_URL") {
            self.image_base_url = Some(url).filter(|u| !u.is_empty());
        }

        if let Some(flag) = lookup("URBAN_CLEAR_CART_ON_CHECKOUT") {
            match flag.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.clear_cart_on_checkout = true,
                "0" | "false" | "no" => self.clear_cart_on_checkout = false,
                _ => warn!(value = %flag, "Unknown clear-cart flag in environment"),
            }
        }

        if let Some(filter) = lookup("URBAN_LOG") {
            self.log_filter = filter;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(AppError::InvalidConfig("store_name must not be empty".into()));
        }

        if self.admin_pin.trim().is_empty() {
            return Err(AppError::InvalidConfig("admin_pin must not be empty".into()));
        }

        if self.minor_units_per_major <= 0 {
            return Err(AppError::InvalidConfig(
                "minor_units_per_major must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("ru", "urban-lunch", "miniapp")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Formats a ruble amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use urban_miniapp_lib::state::ConfigState;
    /// use urban_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(Money::from_rubles(340)), "340 ₽");
    /// ```
    pub fn format_price(&self, amount: Money) -> String {
        format!("{} {}", amount.rubles(), self.currency_symbol)
    }

    /// Resolves a catalog image name against `image_base_url`.
    ///
    /// Absolute URLs pass through unchanged.
    pub fn image_url(&self, img: &str) -> String {
        if img.starts_with("http://") || img.starts_with("https://") {
            return img.to_string();
        }
        match &self.image_base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), img.trim_start_matches('/')),
            None => img.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = ConfigState::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.minor_units_per_major, 100);
        assert!(!config.clear_cart_on_checkout);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ConfigState::from_toml(
            r#"
            store_name = "Urban Lunch Сити"
            clear_cart_on_checkout = true
            "#,
        )
        .unwrap();
        assert_eq!(config.store_name, "Urban Lunch Сити");
        assert!(config.clear_cart_on_checkout);
        assert_eq!(config.admin_pin, "7654");
        assert_eq!(config.currency_symbol, "₽");
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            ConfigState::from_toml("store_name = ["),
            Err(AppError::ConfigLoadFailed(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("URBAN_ADMIN_PIN", "1111"),
            ("URBAN_CLEAR_CART_ON_CHECKOUT", "TRUE"),
            ("URBAN_CATALOG_PATH", "/tmp/menu.json"),
            ("URBAN_IMAGE_BASE_URL", ""),
        ]
        .into_iter()
        .collect();

        let mut config = ConfigState::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.admin_pin, "1111");
        assert!(config.clear_cart_on_checkout);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/menu.json")));
        assert_eq!(config.image_base_url, None);
        assert_eq!(config.store_name, "Urban Lunch");
    }

    #[test]
    fn test_unknown_flag_is_ignored() {
        let mut config = ConfigState::default();
        config.apply_overrides(|key| (key == "URBAN_CLEAR_CART_ON_CHECKOUT").then(|| "maybe".to_string()));
        assert!(!config.clear_cart_on_checkout);
    }

    #[test]
    fn test_validate() {
        let mut config = ConfigState::default();
        config.admin_pin = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = ConfigState::default();
        config.minor_units_per_major = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_format_price() {
        let config = ConfigState::default();
        assert_eq!(config.format_price(Money::from_rubles(0)), "0 ₽");
        assert_eq!(config.format_price(Money::from_rubles(1250)), "1250 ₽");
    }

    #[test]
    fn test_image_url() {
        let mut config = ConfigState::default();
        config.image_base_url = Some("https://cdn.example/menu/".to_string());
        assert_eq!(config.image_url("latte.jpg"), "https://cdn.example/menu/latte.jpg");
        assert_eq!(config.image_url("https://other.example/a.png"), "https://other.example/a.png");

        config.image_base_url = None;
        assert_eq!(config.image_url("latte.jpg"), "latte.jpg");
    }
}
