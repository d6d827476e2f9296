//! Storefront configuration.
//!
//! Loaded from a TOML file; every section and field has a default so an
//! empty file (or no file at all) is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::Currency;
use crate::notifications::NotificationPreferences;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Cart settings.
    #[serde(default)]
    pub cart: CartConfig,

    /// Local storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Default notification preferences for shoppers without saved ones.
    #[serde(default)]
    pub notifications: NotificationPreferences,
}

impl StorefrontConfig {
    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommerceError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CommerceError> {
        if self.cart.storage_key.trim().is_empty() {
            return Err(CommerceError::Config(
                "cart.storage_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Cart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Key of the cart blob in the key-value store.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Currency of every price in the cart.
    #[serde(default)]
    pub currency: Currency,
}

fn default_storage_key() -> String {
    "cart".to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            currency: Currency::default(),
        }
    }
}

/// Local storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory of the file-backed key-value store.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".storefront")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.cart.storage_key, "cart");
        assert_eq!(config.cart.currency, Currency::USD);
        assert_eq!(config.storage.data_dir, PathBuf::from(".storefront"));
        assert!(!config.notifications.marketing_emails);
    }

    #[test]
    fn test_partial_config() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            [cart]
            currency = "EUR"

            [notifications]
            marketing_emails = true
            price_drop_alerts = false
            "#,
        )
        .unwrap();

        assert_eq!(config.cart.storage_key, "cart");
        assert_eq!(config.cart.currency, Currency::EUR);
        assert!(config.notifications.marketing_emails);
        assert!(!config.notifications.price_drop_alerts);
        assert!(config.notifications.email_notifications);
    }

    #[test]
    fn test_unknown_currency_is_config_error() {
        let err = StorefrontConfig::from_toml_str("[cart]\ncurrency = \"XYZ\"\n").unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }

    #[test]
    fn test_empty_storage_key_rejected() {
        let err = StorefrontConfig::from_toml_str("[cart]\nstorage_key = \" \"\n").unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[cart]\nstorage_key = \"cart:guest\"\n").unwrap();

        let config = StorefrontConfig::load(&path).unwrap();
        assert_eq!(config.cart.storage_key, "cart:guest");

        let missing = StorefrontConfig::load(dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(CommerceError::Config(_))));
    }
}
