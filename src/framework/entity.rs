//! # ActorEntity Trait
//!
//! The contract a resource (catalog product, cart session, order) implements so
//! that a single generic [`ResourceActor`](crate::framework::ResourceActor) can
//! host it. Associated types pin down the id, the DTOs, the custom actions and
//! the dependencies injected at run time, so a cart action can never be sent to
//! the catalog by mistake.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A resource managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// # Hooks
/// `on_create` and `on_delete` default to `Ok(())`. `on_update` and
/// `handle_action` must be provided.
///
/// # Context
/// `Context` is handed to every hook. It is supplied to `run()`, not `new()`,
/// so resources can depend on clients of resources created alongside them
/// (cart sessions receive the catalog client, checkout receives the cart client).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier; built from the actor's sequential `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload used to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD (e.g. `AddItem`).
    type Action: Send + Sync + Debug;

    /// Result of an [`ActorEntity::Action`].
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per resource, covering every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its freshly allocated id and the create payload.
    /// Runs synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction and before the entity is stored. Returning an
    /// error discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the entity is removed. Returning an error keeps it.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
