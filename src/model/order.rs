use crate::model::{CartId, CartLine, CartSnapshot, CartTotals, Money};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Built but not yet filled from the cart.
    Pending,
    Placed,
}

/// An order placed from a cart.
///
/// Holds the cart's lines and totals exactly as they were at submission; later
/// catalog or cart changes do not reach it.
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub cart_id: CartId,
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    pub status: OrderStatus,
}

/// Payload for checking out a cart.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub cart_id: CartId,
}

impl Order {
    /// Creates a pending order with no lines; checkout fills it in.
    pub fn new(id: OrderId, cart_id: CartId) -> Self {
        Self {
            id,
            cart_id,
            lines: Vec::new(),
            totals: CartTotals {
                subtotal: Money::ZERO,
                shipping: Money::ZERO,
                total: Money::ZERO,
            },
            status: OrderStatus::Pending,
        }
    }

    /// Fills the order from a cart snapshot and marks it placed.
    pub fn place(&mut self, snapshot: CartSnapshot) {
        self.lines = snapshot.lines;
        self.totals = snapshot.totals;
        self.status = OrderStatus::Placed;
    }
}
