//! # Resource Actor
//!
//! The server half of a resource: it owns every entity of one type and applies
//! requests to them one at a time from a single tokio task.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Response};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Hosts all entities of type `T` and processes their requests sequentially.
///
/// Because only the actor's own task touches `store`, entity state needs no
/// `Mutex`. Separate actors (catalog, carts, orders) still run in parallel.
///
/// Ids are allocated from a counter starting at 1 and converted with
/// `T::Id::from(u32)`.
///
/// ```rust
/// use cart_engine::framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tally { id: u32, count: u32 }
/// #[derive(Debug)] struct TallyCreate;
/// #[derive(Debug)] enum TallyAction { Bump }
/// #[derive(Debug, thiserror::Error)] #[error("tally")] struct TallyError;
///
/// #[async_trait]
/// impl ActorEntity for Tally {
///     type Id = u32; type Create = TallyCreate; type Update = ();
///     type Action = TallyAction; type ActionResult = u32; type Context = (); type Error = TallyError;
///     fn from_create_params(id: u32, _: TallyCreate) -> Result<Self, TallyError> { Ok(Self { id, count: 0 }) }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), TallyError> { Ok(()) }
///     async fn handle_action(&mut self, _: TallyAction, _: &()) -> Result<u32, TallyError> {
///         self.count += 1;
///         Ok(self.count)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tally>::new(8);
///     tokio::spawn(actor.run(()));
///     let id = client.create(TallyCreate).await.unwrap();
///     assert_eq!(client.perform_action(id, TallyAction::Bump).await.unwrap(), 1);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and a client bound to it.
    ///
    /// `buffer_size` bounds the request channel; senders wait while it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    ///
    /// `context` is passed to each entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "CartSession" rather than "cart_engine::model::cart::CartSession"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg, &context, entity_type).await;
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn handle(&mut self, msg: ResourceRequest<T>, context: &T::Context, entity_type: &str) {
        match msg {
            ResourceRequest::Create { params, respond_to } => {
                debug!(entity_type, ?params, "Create");
                let id = T::Id::from(self.next_id);
                self.next_id += 1;

                let mut item = match T::from_create_params(id.clone(), params) {
                    Ok(item) => item,
                    Err(e) => {
                        warn!(entity_type, error = %e, "Create failed");
                        let _ = respond_to.send(Err(entity_error(e)));
                        return;
                    }
                };
                if let Err(e) = item.on_create(context).await {
                    warn!(entity_type, %id, error = %e, "on_create failed");
                    let _ = respond_to.send(Err(entity_error(e)));
                    return;
                }
                self.store.insert(id.clone(), item);
                info!(entity_type, %id, size = self.store.len(), "Created");
                let _ = respond_to.send(Ok(id));
            }
            ResourceRequest::Get { id, respond_to } => {
                let item = self.store.get(&id).cloned();
                debug!(entity_type, %id, found = item.is_some(), "Get");
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            } => {
                debug!(entity_type, %id, ?update, "Update");
                let Some(item) = self.store.get_mut(&id) else {
                    not_found(entity_type, id, respond_to);
                    return;
                };
                match item.on_update(update, context).await {
                    Ok(()) => {
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    }
                    Err(e) => {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(entity_error(e)));
                    }
                }
            }
            ResourceRequest::Delete { id, respond_to } => {
                debug!(entity_type, %id, "Delete");
                let Some(item) = self.store.get(&id) else {
                    not_found(entity_type, id, respond_to);
                    return;
                };
                if let Err(e) = item.on_delete(context).await {
                    warn!(entity_type, %id, error = %e, "on_delete failed");
                    let _ = respond_to.send(Err(entity_error(e)));
                    return;
                }
                self.store.remove(&id);
                info!(entity_type, %id, size = self.store.len(), "Deleted");
                let _ = respond_to.send(Ok(()));
            }
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            } => {
                debug!(entity_type, %id, ?action, "Action");
                let Some(item) = self.store.get_mut(&id) else {
                    not_found(entity_type, id, respond_to);
                    return;
                };
                let result = item.handle_action(action, context).await.map_err(entity_error);
                match &result {
                    Ok(_) => info!(entity_type, %id, "Action ok"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                }
                let _ = respond_to.send(result);
            }
        }
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

fn not_found<Id: std::fmt::Display, R>(entity_type: &str, id: Id, respond_to: Response<R>) {
    warn!(entity_type, %id, "Not found");
    let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Pledge {
        id: u32,
        donor: String,
        amount: u32,
    }

    #[derive(Debug)]
    struct PledgeCreate {
        donor: String,
    }

    #[derive(Debug)]
    struct PledgeUpdate {
        donor: Option<String>,
    }

    #[derive(Debug)]
    enum PledgeAction {
        Add(u32),
    }

    #[derive(Debug, thiserror::Error)]
    enum PledgeError {
        #[error("donor name is required")]
        MissingDonor,
        #[error("pledge is locked")]
        Locked,
    }

    #[async_trait]
    impl ActorEntity for Pledge {
        type Id = u32;
        type Create = PledgeCreate;
        type Update = PledgeUpdate;
        type Action = PledgeAction;
        type ActionResult = u32;
        type Context = ();
        type Error = PledgeError;

        fn from_create_params(id: u32, params: PledgeCreate) -> Result<Self, Self::Error> {
            if params.donor.is_empty() {
                return Err(PledgeError::MissingDonor);
            }
            Ok(Self {
                id,
                donor: params.donor,
                amount: 0,
            })
        }

        async fn on_update(&mut self, update: PledgeUpdate, _ctx: &()) -> Result<(), Self::Error> {
            if let Some(donor) = update.donor {
                self.donor = donor;
            }
            Ok(())
        }

        async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
            if self.amount > 100 {
                return Err(PledgeError::Locked);
            }
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: PledgeAction,
            _ctx: &(),
        ) -> Result<u32, Self::Error> {
            match action {
                PledgeAction::Add(n) => {
                    self.amount += n;
                    Ok(self.amount)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_crud_and_actions() {
        let (actor, client) = ResourceActor::<Pledge>::new(10);
        let handle = tokio::spawn(actor.run(()));

        let id = client
            .create(PledgeCreate {
                donor: "Amina".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        assert_eq!(client.perform_action(id, PledgeAction::Add(20)).await.unwrap(), 20);
        assert_eq!(client.perform_action(id, PledgeAction::Add(5)).await.unwrap(), 25);

        let updated = client
            .update(
                id,
                PledgeUpdate {
                    donor: Some("Yusuf".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.donor, "Yusuf");
        assert_eq!(updated.amount, 25);

        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_create_consumes_no_entity() {
        let (actor, client) = ResourceActor::<Pledge>::new(10);
        tokio::spawn(actor.run(()));

        let err = client
            .create(PledgeCreate { donor: String::new() })
            .await
            .unwrap_err();
        let err = err.downcast_entity::<PledgeError>().unwrap();
        assert!(matches!(err, PledgeError::MissingDonor));

        assert!(client.get(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_id_and_vetoed_delete() {
        let (actor, client) = ResourceActor::<Pledge>::new(10);
        tokio::spawn(actor.run(()));

        let missing = client.perform_action(42, PledgeAction::Add(1)).await;
        assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "42"));

        let id = client.create(PledgeCreate { donor: "Omar".into() }).await.unwrap();
        client.perform_action(id, PledgeAction::Add(500)).await.unwrap();
        assert!(client.delete(id).await.is_err());
        assert!(client.get(id).await.unwrap().is_some());
    }
}
