//! # Product Client
//!
//! High-level API for the catalog. Wraps a `ResourceClient<Product>`.

use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{CatalogEntry, ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

fn product_error(e: FrameworkError) -> ProductError {
    match e {
        FrameworkError::NotFound(id) => ProductError::NotFound(id),
        other => other
            .downcast_entity::<ProductError>()
            .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string())),
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result {:?}", result))
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        product_error(e)
    }
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(product_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(product_error)
    }

    /// Loads seed entries in order, stopping at the first failure.
    #[instrument(skip(self, entries), fields(count = entries.len()))]
    pub async fn seed(&self, entries: Vec<CatalogEntry>) -> Result<Vec<ProductId>, ProductError> {
        let mut ids = Vec::with_capacity(entries.len());
        for entry in entries {
            ids.push(self.create_product(entry.into()).await?);
        }
        info!(count = ids.len(), "Catalog seeded");
        Ok(ids)
    }

    /// Whether the product can currently be added to a cart.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<bool, ProductError> {
        debug!("Checking stock for product {}", id);
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(product_error)?
        {
            ProductActionResult::CheckStock(in_stock) => Ok(in_stock),
            other => Err(unexpected(other)),
        }
    }

    /// Sets the stock flag and returns the previous one.
    #[instrument(skip(self))]
    pub async fn set_stock(&self, id: ProductId, in_stock: bool) -> Result<bool, ProductError> {
        debug!("Setting stock for product {} to {}", id, in_stock);
        match self
            .inner
            .perform_action(id, ProductAction::SetStock(in_stock))
            .await
            .map_err(product_error)?
        {
            ProductActionResult::SetStock(previous) => Ok(previous),
            other => Err(unexpected(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};
    use crate::model::Money;

    #[tokio::test]
    async fn test_check_stock_returns_flag() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let check_task =
            tokio::spawn(async move { product_client.check_stock(ProductId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(1));
        assert!(matches!(action, ProductAction::CheckStock));
        responder.send(Ok(ProductActionResult::CheckStock(false))).unwrap();

        assert!(!check_task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_type() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let create_task = tokio::spawn(async move {
            product_client
                .create_product(ProductCreate {
                    name: String::new(),
                    price: Money::from_cents(100),
                    in_stock: true,
                })
                .await
        });

        match receiver.recv().await {
            Some(crate::framework::ResourceRequest::Create { respond_to, .. }) => {
                respond_to
                    .send(Err(FrameworkError::EntityError(Box::new(
                        ProductError::InvalidProduct("name must not be empty".into()),
                    ))))
                    .unwrap();
            }
            _ => panic!("Expected Create request"),
        }

        let result = create_task.await.unwrap();
        assert!(matches!(result, Err(ProductError::InvalidProduct(_))));
    }

    #[tokio::test]
    async fn test_missing_product_maps_to_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(3))
            .return_err(FrameworkError::NotFound(ProductId(3).to_string()));

        let product_client = ProductClient::new(mock.client());
        let result = product_client.set_stock(ProductId(3), true).await;
        assert_eq!(result, Err(ProductError::NotFound("product_3".into())));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_result_is_an_error_not_a_panic() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(1))
            .return_ok(ProductActionResult::SetStock(true));

        let product_client = ProductClient::new(mock.client());
        let result = product_client.check_stock(ProductId(1)).await;
        assert!(matches!(result, Err(ProductError::ActorCommunicationError(_))));
    }
}
