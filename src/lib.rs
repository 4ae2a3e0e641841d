//! # Cart Engine
//!
//! The shopping cart behind the community shop: an ordered list of line items
//! with exact, integer-cent totals, hosted as per-session resources next to
//! the product catalog and checkout.
//!
//! ## The engine
//!
//! [`model::Cart`] is plain synchronous code:
//!
//! ```rust
//! use cart_engine::model::{Cart, Money, Product, ProductId};
//!
//! let rug = Product::new(ProductId(1), "Prayer Rug", Money::from_cents(2999), true);
//! let stand = Product::new(ProductId(2), "Quran Stand", Money::from_cents(3499), true);
//!
//! let mut cart = Cart::default();
//! cart.add_item(&rug);
//! cart.add_item(&stand);
//! assert_eq!(cart.compute_totals().total.to_string(), "64.98"); // free shipping above 50.00
//!
//! cart.update_quantity(rug.id, 0); // same as remove_item
//! let totals = cart.compute_totals();
//! assert_eq!(totals.shipping.to_string(), "5.99");
//! assert_eq!(totals.total.to_string(), "40.98");
//! ```
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! A generic [`ResourceActor`](framework::ResourceActor) that owns all entities
//! of one type and applies requests to them sequentially, plus the matching
//! [`ResourceClient`](framework::ResourceClient) and test doubles.
//!
//! ### 2. The Data ([`model`])
//! [`Money`](model::Money), [`Product`](model::Product), the
//! [`Cart`](model::Cart) engine, [`CartSession`](model::CartSession) and
//! [`Order`](model::Order).
//!
//! ### 3. The Resources ([`product_actor`], [`cart_actor`], [`order_actor`])
//! [`ActorEntity`](framework::ActorEntity) implementations: the catalog, one
//! cart per session, and checkout.
//!
//! ### 4. The Interface ([`clients`])
//! [`ProductClient`](clients::ProductClient), [`CartClient`](clients::CartClient)
//! and [`OrderClient`](clients::OrderClient), each with its own error type.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`ShopSystem`](lifecycle::ShopSystem) wires and stops everything;
//! [`ShopConfig`](lifecycle::ShopConfig) and
//! [`setup_tracing`](lifecycle::setup_tracing) cover configuration and logs.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod cart_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
