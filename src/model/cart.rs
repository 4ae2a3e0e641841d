//! The cart engine: an ordered set of line items and the totals derived from it.
//!
//! Everything here is synchronous and in-memory. [`Cart`] never talks to the
//! catalog; a line keeps the name and unit price the product had when it was
//! first added.

use crate::model::{Money, Product, ProductId};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Flat-rate shipping that becomes free once the subtotal passes a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Subtotals strictly above this ship free.
    pub threshold: Money,
    pub flat_rate: Money,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            threshold: Money::from_cents(5000),
            flat_rate: Money::from_cents(599),
        }
    }
}

impl ShippingPolicy {
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal > self.threshold {
            Money::ZERO
        } else {
            self.flat_rate
        }
    }
}

/// One product in the cart. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

/// Lines and totals captured together, as handed to checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

/// Line items in insertion order, unique by product.
///
/// Mutations are total: unknown product ids are ignored and a non-positive
/// quantity removes the line. Nothing here returns an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    shipping: ShippingPolicy,
}

impl Cart {
    pub fn new(shipping: ShippingPolicy) -> Self {
        Self {
            lines: Vec::new(),
            shipping,
        }
    }

    /// Adds one unit of `product`, appending a new line the first time.
    ///
    /// Returns the line's quantity afterwards. Out-of-stock products are
    /// refused with `None` and leave the cart untouched; callers are expected
    /// to have filtered them already.
    pub fn add_item(&mut self, product: &Product) -> Option<u32> {
        if !product.in_stock {
            warn!(product_id = %product.id, "Refusing out-of-stock product");
            return None;
        }

        match self.position(product.id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(1);
                Some(line.quantity)
            }
            None => {
                self.lines.push(CartLine {
                    product_id: product.id,
                    name: product.name.clone(),
                    unit_price: product.price,
                    quantity: 1,
                });
                Some(1)
            }
        }
    }

    /// Sets a line's quantity outright. `new_quantity <= 0` removes the line.
    ///
    /// Returns `false` when the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: i64) -> bool {
        let Some(idx) = self.position(product_id) else {
            return false;
        };
        if new_quantity <= 0 {
            self.lines.remove(idx);
        } else {
            self.lines[idx].quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }
        true
    }

    /// Returns `false` when the product is not in the cart.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        match self.position(product_id) {
            Some(idx) => {
                self.lines.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn compute_totals(&self) -> CartTotals {
        let subtotal: Money = self.lines.iter().map(CartLine::line_total).sum();
        let shipping = self.shipping.shipping_for(subtotal);
        CartTotals {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }

    /// Captures lines and totals, leaving the cart empty.
    pub fn take(&mut self) -> CartSnapshot {
        let totals = self.compute_totals();
        CartSnapshot {
            lines: std::mem::take(&mut self.lines),
            totals,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity of `product_id`, 0 when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.position(product_id)
            .map_or(0, |idx| self.lines[idx].quantity)
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn shipping_policy(&self) -> ShippingPolicy {
        self.shipping
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.product_id == product_id)
    }
}
