//! # ActorClient Trait
//!
//! Shared `get`/`delete` for the resource-specific clients
//! ([`ProductClient`](crate::clients::ProductClient),
//! [`CartClient`](crate::clients::CartClient),
//! [`OrderClient`](crate::clients::OrderClient)).

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Implemented by each resource client on top of its inner [`ResourceClient`].
///
/// Implementors supply the inner client and a mapping from [`FrameworkError`]
/// to their own error enum; `get` and `delete` come for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    type Error: Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetches an entity by id; `Ok(None)` when it does not exist.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Deletes an entity by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
