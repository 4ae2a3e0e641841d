//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient),
//! one per resource. These are what the presentation layer talks to.

pub mod cart_client;
pub mod order_client;
pub mod product_client;

pub use cart_client::*;
pub use order_client::*;
pub use product_client::*;
