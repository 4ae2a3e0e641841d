//! # Order Client
//!
//! Checkout entry point. Wraps a `ResourceClient<Order>`; the cart snapshot is
//! taken by the Order actor's `on_create` hook.

use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{CartId, Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

fn order_error(e: FrameworkError) -> OrderError {
    match e {
        FrameworkError::NotFound(id) => OrderError::NotFound(id),
        other => other
            .downcast_entity::<OrderError>()
            .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        order_error(e)
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order from the cart's current contents and empties the cart.
    #[instrument(skip(self))]
    pub async fn checkout(&self, cart_id: CartId) -> Result<OrderId, OrderError> {
        info!("Sending checkout to actor");
        self.inner
            .create(OrderCreate { cart_id })
            .await
            .map_err(order_error)
    }
}
