//! Custom actions for [`CartSession`](crate::model::CartSession) entities.
//!
//! Each variant maps onto one [`Cart`](crate::model::Cart) operation.

use crate::model::{CartLine, CartSnapshot, CartTotals, ProductId};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit, resolving the product through the catalog first.
    ///
    /// # Errors
    /// Fails when the catalog does not know the product or it is out of stock.
    AddItem(ProductId),
    /// Absolute set; `quantity <= 0` removes the line. Unknown ids are ignored.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    RemoveItem(ProductId),
    Clear,
    Totals,
    Lines,
    /// Snapshots lines and totals and empties the cart in one step.
    ///
    /// # Errors
    /// Fails on an empty cart.
    Checkout,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    /// Quantity of the line after the add.
    AddItem(u32),
    /// Whether a line was affected.
    UpdateQuantity(bool),
    /// Whether a line was removed.
    RemoveItem(bool),
    Clear,
    Totals(CartTotals),
    Lines(Vec<CartLine>),
    Checkout(CartSnapshot),
}
