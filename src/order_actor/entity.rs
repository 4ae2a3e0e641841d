//! [`ActorEntity`] implementation for [`Order`].
//!
//! Checkout happens in `on_create`: the cart is snapshotted and emptied by a
//! single cart action, and the order is only stored if that succeeded.

use super::error::OrderError;
use crate::clients::CartClient;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = CartClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.cart_id))
    }

    async fn on_create(&mut self, carts: &CartClient) -> Result<(), Self::Error> {
        let snapshot = carts.checkout(self.cart_id).await?;
        info!(
            order_id = %self.id,
            cart_id = %self.cart_id,
            lines = snapshot.lines.len(),
            total = %snapshot.totals.total,
            "Cart snapshotted for order"
        );
        self.place(snapshot);
        Ok(())
    }

    // Placed orders are immutable.
    async fn on_update(&mut self, _update: (), _ctx: &CartClient) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &CartClient) -> Result<(), Self::Error> {
        Ok(())
    }
}
