//! # Cart Client
//!
//! The presentation layer's handle on cart sessions. Every engine operation
//! has a method here; the cart's own rules (ignore unknown ids, remove on a
//! non-positive quantity) are applied inside the actor.

use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{
    CartCreate, CartId, CartLine, CartSession, CartSnapshot, CartTotals, CartUpdate, ProductId,
    ShippingPolicy,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartSession>,
    shipping: ShippingPolicy,
}

fn cart_error(e: FrameworkError) -> CartError {
    match e {
        FrameworkError::NotFound(id) => CartError::NotFound(id),
        other => other
            .downcast_entity::<CartError>()
            .unwrap_or_else(|e| CartError::ActorCommunicationError(e.to_string())),
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("unexpected action result {:?}", result))
}

#[async_trait]
impl ActorClient<CartSession> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        cart_error(e)
    }
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartSession>, shipping: ShippingPolicy) -> Self {
        Self { inner, shipping }
    }

    async fn act(&self, id: CartId, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(cart_error)
    }

    /// Opens an empty cart for a new session.
    #[instrument(skip(self))]
    pub async fn open_cart(&self, session: &str) -> Result<CartId, CartError> {
        debug!("Sending request");
        let params = CartCreate {
            session: session.to_string(),
            shipping: self.shipping,
        };
        self.inner.create(params).await.map_err(cart_error)
    }

    /// Ends the session and discards its cart.
    #[instrument(skip(self))]
    pub async fn close_cart(&self, id: CartId) -> Result<(), CartError> {
        debug!("Sending request");
        self.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn rotate_session(&self, id: CartId, session: &str) -> Result<(), CartError> {
        debug!("Sending request");
        let update = CartUpdate {
            session: Some(session.to_string()),
        };
        self.inner.update(id, update).await.map_err(cart_error)?;
        Ok(())
    }

    /// Adds one unit of a product and returns the line's new quantity.
    #[instrument(skip(self))]
    pub async fn add_item(&self, id: CartId, product_id: ProductId) -> Result<u32, CartError> {
        debug!("Adding product {} to cart {}", product_id, id);
        match self.act(id, CartAction::AddItem(product_id)).await? {
            CartActionResult::AddItem(quantity) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    /// Sets a line's quantity; `quantity <= 0` removes it. Returns whether a
    /// line was affected.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: CartId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<bool, CartError> {
        debug!("Setting product {} to {} in cart {}", product_id, quantity, id);
        let action = CartAction::UpdateQuantity {
            product_id,
            quantity,
        };
        match self.act(id, action).await? {
            CartActionResult::UpdateQuantity(changed) => Ok(changed),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: CartId, product_id: ProductId) -> Result<bool, CartError> {
        debug!("Removing product {} from cart {}", product_id, id);
        match self.act(id, CartAction::RemoveItem(product_id)).await? {
            CartActionResult::RemoveItem(removed) => Ok(removed),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, id: CartId) -> Result<(), CartError> {
        debug!("Clearing cart {}", id);
        match self.act(id, CartAction::Clear).await? {
            CartActionResult::Clear => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn totals(&self, id: CartId) -> Result<CartTotals, CartError> {
        match self.act(id, CartAction::Totals).await? {
            CartActionResult::Totals(totals) => Ok(totals),
            other => Err(unexpected(other)),
        }
    }

    /// Lines in the order they were first added.
    #[instrument(skip(self))]
    pub async fn lines(&self, id: CartId) -> Result<Vec<CartLine>, CartError> {
        match self.act(id, CartAction::Lines).await? {
            CartActionResult::Lines(lines) => Ok(lines),
            other => Err(unexpected(other)),
        }
    }

    /// Takes the cart's contents for an order and leaves it empty.
    #[instrument(skip(self))]
    pub async fn checkout(&self, id: CartId) -> Result<CartSnapshot, CartError> {
        debug!("Checking out cart {}", id);
        match self.act(id, CartAction::Checkout).await? {
            CartActionResult::Checkout(snapshot) => Ok(snapshot),
            other => Err(unexpected(other)),
        }
    }
}
