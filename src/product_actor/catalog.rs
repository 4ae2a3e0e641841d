//! Catalog seed data.
//!
//! Entries arrive as JSON, e.g.
//! `[{"name": "Prayer Rug", "price": "29.99", "in_stock": true}]`.
//! Anything malformed is rejected here so the catalog only ever holds
//! well-formed products.

use crate::model::{Money, ProductCreate};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Covers malformed JSON as well as unparseable prices.
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog entry {index} is invalid: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

/// One product as listed in seed data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    pub name: String,
    pub price: Money,
    #[serde(default = "in_stock_by_default")]
    pub in_stock: bool,
}

fn in_stock_by_default() -> bool {
    true
}

impl From<CatalogEntry> for ProductCreate {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            name: entry.name,
            price: entry.price,
            in_stock: entry.in_stock,
        }
    }
}

/// Parses and validates a JSON array of [`CatalogEntry`].
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
    for (index, entry) in entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            return Err(CatalogError::InvalidEntry {
                index,
                reason: "name must not be empty".into(),
            });
        }
    }
    Ok(entries)
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<CatalogEntry>, CatalogError> {
    let json = std::fs::read_to_string(path)?;
    parse_catalog(&json)
}

/// The shop's stock list, used when no catalog file is configured.
pub fn default_catalog() -> Vec<CatalogEntry> {
    [
        ("Prayer Rug", 2999, true),
        ("Quran Stand", 3499, true),
        ("Tasbih Prayer Beads", 1250, true),
        ("Attar Oil Set", 1899, true),
        ("Calligraphy Print", 4500, false),
    ]
    .into_iter()
    .map(|(name, cents, in_stock)| CatalogEntry {
        name: name.to_string(),
        price: Money::from_cents(cents),
        in_stock,
    })
    .collect()
}
