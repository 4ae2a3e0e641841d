//! # Configuration
//!
//! Read from the environment (after loading an optional `.env` file):
//!
//! | Variable             | Default | Meaning                                  |
//! |----------------------|---------|------------------------------------------|
//! | `SHIPPING_THRESHOLD` | `50.00` | subtotals strictly above ship free       |
//! | `SHIPPING_FLAT_RATE` | `5.99`  | shipping charged otherwise               |
//! | `ACTOR_BUFFER_SIZE`  | `32`    | request channel capacity per resource    |
//! | `CATALOG_PATH`       | unset   | JSON seed file; built-in catalog if unset |

use crate::model::{Money, MoneyError, ShippingPolicy};
use crate::product_actor::{default_catalog, load_catalog, CatalogEntry, CatalogError};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid {key}={value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    pub shipping: ShippingPolicy,
    pub buffer_size: usize,
    pub catalog_path: Option<PathBuf>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            shipping: ShippingPolicy::default(),
            buffer_size: 32,
            catalog_path: None,
        }
    }
}

impl ShopConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        info!(
            threshold = %config.shipping.threshold,
            flat_rate = %config.shipping.flat_rate,
            buffer_size = config.buffer_size,
            "Shop configuration loaded"
        );
        Ok(config)
    }

    /// Builds the config from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let money = |key: &'static str, default: Money| -> Result<Money, ConfigError> {
            match lookup(key) {
                None => Ok(default),
                Some(value) => value.parse().map_err(|e: MoneyError| ConfigError::Invalid {
                    key,
                    reason: e.to_string(),
                    value,
                }),
            }
        };
        let shipping = ShippingPolicy {
            threshold: money("SHIPPING_THRESHOLD", defaults.shipping.threshold)?,
            flat_rate: money("SHIPPING_FLAT_RATE", defaults.shipping.flat_rate)?,
        };

        let buffer_size = match lookup("ACTOR_BUFFER_SIZE") {
            None => defaults.buffer_size,
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "ACTOR_BUFFER_SIZE",
                        value,
                        reason: "expected a positive integer".into(),
                    })
                }
            },
        };

        let catalog_path = lookup("CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            shipping,
            buffer_size,
            catalog_path,
        })
    }

    /// Seed entries from `catalog_path`, or the built-in catalog.
    pub fn catalog(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        match &self.catalog_path {
            Some(path) => load_catalog(path),
            None => Ok(default_catalog()),
        }
    }
}
