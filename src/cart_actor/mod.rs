//! # Cart Actor
//!
//! Hosts one [`CartSession`] per visitor session. Each session wraps the
//! synchronous [`Cart`](crate::model::Cart) engine; this actor adds the
//! session lifecycle (open on session start, delete on session end) and the
//! catalog lookup needed to add a product.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`CartSession`]
//! - [`error`] - [`CartError`]
//! - [`actions`] - [`CartAction`] / [`CartActionResult`]
//! - [`new()`] - factory for the actor and its client
//!
//! ## Dependencies
//!
//! `Context = ProductClient`: adding an item resolves the product in the
//! catalog and refuses unknown or out-of-stock products before the engine
//! sees them.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::{CartSession, ShippingPolicy};

/// Creates a new Cart actor and its client. Carts opened through the client
/// use `shipping`.
pub fn new(
    buffer_size: usize,
    shipping: ShippingPolicy,
) -> (ResourceActor<CartSession>, CartClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, CartClient::new(client, shipping))
}
