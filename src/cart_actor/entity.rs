//! [`ActorEntity`] implementation for [`CartSession`].
//!
//! The session delegates every mutation to its [`Cart`](crate::model::Cart).
//! Its only extra duty is the stock check on add, which needs the catalog and
//! therefore lives here rather than in the engine.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::clients::ProductClient;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{CartCreate, CartId, CartSession, CartUpdate, ProductId};
use async_trait::async_trait;
use tracing::debug;

impl CartSession {
    async fn add_from_catalog(
        &mut self,
        product_id: ProductId,
        catalog: &ProductClient,
    ) -> Result<u32, CartError> {
        let product = catalog
            .get(product_id)
            .await?
            .ok_or(CartError::ProductNotFound(product_id))?;
        if !product.in_stock {
            return Err(CartError::OutOfStock(product_id));
        }
        self.cart
            .add_item(&product)
            .ok_or(CartError::OutOfStock(product_id))
    }
}

#[async_trait]
impl ActorEntity for CartSession {
    type Id = CartId;
    type Create = CartCreate;
    type Update = CartUpdate;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = ProductClient;
    type Error = CartError;

    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.session, params.shipping))
    }

    async fn on_update(
        &mut self,
        update: CartUpdate,
        _ctx: &ProductClient,
    ) -> Result<(), Self::Error> {
        if let Some(session) = update.session {
            self.session = session;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        catalog: &ProductClient,
    ) -> Result<CartActionResult, Self::Error> {
        let result = match action {
            CartAction::AddItem(product_id) => {
                CartActionResult::AddItem(self.add_from_catalog(product_id, catalog).await?)
            }
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => CartActionResult::UpdateQuantity(self.cart.update_quantity(product_id, quantity)),
            CartAction::RemoveItem(product_id) => {
                CartActionResult::RemoveItem(self.cart.remove_item(product_id))
            }
            CartAction::Clear => {
                self.cart.clear();
                CartActionResult::Clear
            }
            CartAction::Totals => CartActionResult::Totals(self.cart.compute_totals()),
            CartAction::Lines => CartActionResult::Lines(self.cart.lines().to_vec()),
            CartAction::Checkout => {
                if self.cart.is_empty() {
                    return Err(CartError::EmptyCart(self.id));
                }
                CartActionResult::Checkout(self.cart.take())
            }
        };
        debug!(
            cart_id = %self.id,
            lines = self.cart.len(),
            items = self.cart.item_count(),
            "Cart state"
        );
        Ok(result)
    }
}
