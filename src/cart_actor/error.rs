//! Error types for the Cart actor.

use crate::model::{CartId, ProductId};
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Only adding and checking out can fail; quantity updates and removals are
/// defined for every input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The cart session does not exist.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// The catalog has no such product.
    #[error("Product not found in catalog: {0}")]
    ProductNotFound(ProductId),

    /// The product exists but cannot be added right now.
    #[error("Product is out of stock: {0}")]
    OutOfStock(ProductId),

    /// Checkout was requested on a cart with no lines.
    #[error("Cart is empty: {0}")]
    EmptyCart(CartId),

    /// The catalog lookup itself failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] ProductError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
