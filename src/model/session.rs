use crate::model::{Cart, ShippingPolicy};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for cart sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// The cart belonging to one visitor session.
///
/// Opened empty when the session starts and deleted when it ends; nothing is
/// shared between sessions.
///
/// See [`impl ActorEntity for CartSession`](#impl-ActorEntity-for-CartSession) for
/// the actions it accepts ([`CartAction`](crate::cart_actor::CartAction)).
#[derive(Debug, Clone, Serialize)]
pub struct CartSession {
    pub id: CartId,
    /// Opaque session key supplied by the caller (e.g. a cookie value).
    pub session: String,
    pub cart: Cart,
}

impl CartSession {
    pub fn new(id: CartId, session: impl Into<String>, shipping: ShippingPolicy) -> Self {
        Self {
            id,
            session: session.into(),
            cart: Cart::new(shipping),
        }
    }
}

/// Payload for opening a cart session.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub session: String,
    pub shipping: ShippingPolicy,
}

/// Payload for updating a cart session, e.g. when the session key rotates on
/// sign-in.
#[derive(Debug, Clone, Default)]
pub struct CartUpdate {
    pub session: Option<String>,
}
