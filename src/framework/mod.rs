//! Generic resource hosting: one actor task per resource type, typed
//! messages in, typed replies out.
//!
//! - [`ActorEntity`] - what a resource must implement
//! - [`ResourceActor`] - the task that owns and mutates entities
//! - [`ResourceClient`] - the cloneable handle used to reach it
//! - [`ActorClient`] - shared `get`/`delete` for resource-specific clients
//! - [`FrameworkError`] - plumbing failures
//!
//! See [`mock`] for testing clients without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
