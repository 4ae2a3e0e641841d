//! # System Lifecycle
//!
//! Starting, wiring and stopping the shop's resources, plus the ambient
//! setup around them.
//!
//! - [`ShopSystem`] creates each actor, injects its dependencies through
//!   `run(context)` and keeps the task handles for shutdown.
//! - [`ShopConfig`] holds the shipping policy, channel sizes and catalog
//!   source.
//! - [`setup_tracing`] installs the log subscriber.
//!
//! Dependencies are passed to `run()` rather than `new()`, so every actor can
//! be created first and wired afterwards:
//!
//! ```rust,ignore
//! let (product_actor, product_client) = product_actor::new(32);
//! let (cart_actor, cart_client) = cart_actor::new(32, ShippingPolicy::default());
//! tokio::spawn(cart_actor.run(product_client.clone()));
//! ```

pub mod config;
pub mod shop_system;
pub mod tracing;

pub use self::config::*;
pub use self::shop_system::*;
pub use self::tracing::*;
