//! Pure data structures: money, catalog products, the cart engine, cart
//! sessions and orders. The resource wiring lives in the `*_actor` modules.

pub mod cart;
pub mod money;
pub mod order;
pub mod product;
pub mod session;

pub use cart::*;
pub use money::*;
pub use order::*;
pub use product::*;
pub use session::*;
