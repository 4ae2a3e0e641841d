use crate::model::Money;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A product in the shop catalog.
///
/// The catalog resource owns products; carts only copy the name and price of a
/// product when it is first added.
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductUpdate`])
/// - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub in_stock: bool,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier (allocated by the catalog actor)
    /// * `name` - Display name
    /// * `price` - Unit price
    /// * `in_stock` - Whether the product may be added to a cart
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, in_stock: bool) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            in_stock,
        }
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: Money,
    pub in_stock: bool,
}

/// Payload for editing a catalog product. Stock is toggled through
/// [`ProductAction::SetStock`](crate::product_actor::ProductAction::SetStock).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<Money>,
}
