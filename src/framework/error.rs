//! # Framework Errors
//!
//! Failures that belong to the message plumbing rather than to a resource.
//! Resource clients translate these into their own error enums.

/// Errors raised while talking to a [`ResourceActor`](crate::framework::ResourceActor).
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the resource's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Clients use this to surface `CartError::OutOfStock` and friends unchanged
    /// instead of flattening them into a communication error.
    pub fn downcast_entity<E: std::error::Error + 'static>(self) -> Result<E, Self> {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}
