//! Error types for the Order actor.

use crate::cart_actor::CartError;
use crate::model::CartId;
use thiserror::Error;

/// Errors that can occur during checkout.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// There was nothing in the cart to order.
    #[error("Cannot check out an empty cart: {0}")]
    EmptyCart(CartId),

    /// The cart could not be snapshotted (e.g. the session is gone).
    #[error("Cart error: {0}")]
    Cart(CartError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<CartError> for OrderError {
    fn from(e: CartError) -> Self {
        match e {
            CartError::EmptyCart(cart_id) => OrderError::EmptyCart(cart_id),
            other => OrderError::Cart(other),
        }
    }
}
