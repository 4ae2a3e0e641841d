//! # Test Doubles
//!
//! Two ways to test code that talks to a resource without running the real one:
//!
//! - [`MockClient`]: queue canned replies (`expect_get(id).return_ok(..)`),
//!   hand out its [`ResourceClient`], then [`MockClient::verify`] that every
//!   expectation was consumed by a matching request.
//! - [`create_mock_client`] with [`expect_get`] / [`expect_action`]: receive
//!   the raw [`ResourceRequest`] yourself, assert on its payload and answer it.
//!
//! A cart session depends on the catalog through a `ProductClient`, so a cart
//! test can stub the catalog like this:
//!
//! ```rust
//! use cart_engine::framework::mock::MockClient;
//! use cart_engine::model::{Money, Product, ProductId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut catalog = MockClient::<Product>::new();
//!     catalog
//!         .expect_get(ProductId(1))
//!         .return_ok(Some(Product::new(ProductId(1), "Prayer Rug", Money::from_cents(2999), true)));
//!
//!     let product = catalog.client().get(ProductId(1)).await.unwrap().unwrap();
//!     assert_eq!(product.price.cents(), 2999);
//!     catalog.verify();
//! }
//! ```

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: ActorEntity> {
    Create(Result<T::Id, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    Delete(T::Id, Result<(), FrameworkError>),
    Action(T::Id, Result<T::ActionResult, FrameworkError>),
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    failures: Vec<String>,
}

type Shared<T> = Arc<Mutex<MockState<T>>>;

/// A stand-in resource that answers from a queue of expectations, in order.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Spawns the responder task. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state: Shared<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            failures: Vec::new(),
        }));
        let responder_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = responder_state.lock().expect("mock state poisoned");
                let next = state.expectations.pop_front();
                if let Err(failure) = answer(request, next) {
                    state.failures.push(failure);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(Expectation::Create)
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |r| Expectation::Get(id, r))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |r| Expectation::Delete(id, r))
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |r| Expectation::Action(id, r))
    }

    fn builder<R>(
        &mut self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            state: self.state.clone(),
            make: Box::new(make),
        }
    }

    /// Panics if a request did not match its expectation or if any
    /// expectation was never consumed.
    pub fn verify(&self) {
        let state = self.state.lock().expect("mock state poisoned");
        if !state.failures.is_empty() {
            panic!("Unexpected requests: {:?}", state.failures);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

type MakeExpectation<T, R> = Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>;

/// Completes an expectation with the reply the mock will send.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    state: Shared<T>,
    make: MakeExpectation<T, R>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.state
            .lock()
            .expect("mock state poisoned")
            .expectations
            .push_back(expectation);
    }
}

fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
) -> Result<(), String> {
    match (request, expectation) {
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
            let _ = respond_to.send(response);
            Ok(())
        }
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get(expected, response))) => {
            reply_if_same(id, expected, respond_to, response)
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete(expected, response)),
        ) => reply_if_same(id, expected, respond_to, response),
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action(expected, response)),
        ) => reply_if_same(id, expected, respond_to, response),
        (request, _) => Err(format!("unexpected request {:?}", describe(&request))),
    }
}

fn reply_if_same<Id: PartialEq + std::fmt::Display, R>(
    id: Id,
    expected: Id,
    respond_to: oneshot::Sender<Result<R, FrameworkError>>,
    response: Result<R, FrameworkError>,
) -> Result<(), String> {
    if id != expected {
        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
        return Err(format!("expected request for {expected}, got {id}"));
    }
    let _ = respond_to.send(response);
    Ok(())
}

fn describe<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("Create {params:?}"),
        ResourceRequest::Get { id, .. } => format!("Get {id}"),
        ResourceRequest::Update { id, update, .. } => format!("Update {id} {update:?}"),
        ResourceRequest::Delete { id, .. } => format!("Delete {id}"),
        ResourceRequest::Action { id, action, .. } => format!("Action {id} {action:?}"),
    }
}

/// A client whose requests land on the returned receiver.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Takes the next request, expecting a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Takes the next request, expecting an `Action`.
#[allow(clippy::type_complexity)]
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Money, Product, ProductCreate, ProductId};

    fn rug() -> Product {
        Product::new(ProductId(1), "Prayer Rug", Money::from_cents(2999), true)
    }

    #[tokio::test]
    async fn test_expectations_answer_in_order() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_create().return_ok(ProductId(1));
        mock.expect_get(ProductId(1)).return_ok(Some(rug()));

        let client = mock.client();
        let id = client
            .create(ProductCreate {
                name: "Prayer Rug".into(),
                price: Money::from_cents(2999),
                in_stock: true,
            })
            .await
            .unwrap();
        assert_eq!(id, ProductId(1));
        let fetched = client.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Prayer Rug");

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected requests")]
    async fn test_wrong_id_is_reported() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(1)).return_ok(Some(rug()));

        let result = mock.client().get(ProductId(2)).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_raw_channel_helpers() {
        let (client, mut receiver) = create_mock_client::<Product>(4);
        let task = tokio::spawn(async move { client.get(ProductId(7)).await });

        let (id, respond_to) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, ProductId(7));
        respond_to.send(Ok(None)).unwrap();

        assert!(task.await.unwrap().unwrap().is_none());
    }
}
