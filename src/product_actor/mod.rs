//! # Product Actor
//!
//! The shop catalog: read-only reference data for carts, plus the admin-side
//! operations that maintain it.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] / [`ProductActionResult`] for the stock flag
//! - [`catalog`] - JSON seed data, validated before it reaches the actor
//! - [`new()`] - factory for the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use cart_engine::framework::ActorClient;
//! use cart_engine::model::{Money, ProductCreate};
//! use cart_engine::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_product(ProductCreate {
//!             name: "Prayer Rug".to_string(),
//!             price: Money::from_cents(2999),
//!             in_stock: true,
//!         })
//!         .await?;
//!
//!     assert!(client.check_stock(id).await?);
//!     client.set_stock(id, false).await?;
//!     assert!(!client.get(id).await?.unwrap().in_stock);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod catalog;
pub mod entity;
pub mod error;

pub use actions::*;
pub use catalog::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::Product;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(client))
}
