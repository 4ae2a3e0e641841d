use crate::clients::{CartClient, OrderClient, ProductClient};
use crate::lifecycle::config::ShopConfig;
use crate::model::ProductId;
use crate::product_actor::{CatalogError, ProductError};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("catalog seed data rejected: {0}")]
    Catalog(#[from] CatalogError),

    #[error("catalog seeding failed: {0}")]
    Product(#[from] ProductError),

    #[error("actor task failed: {0}")]
    Shutdown(String),
}

/// Runs the shop's resources and hands out their clients.
///
/// Three resources, wired leaves first:
/// - **Product**: the catalog (no dependencies)
/// - **CartSession**: one cart per visitor session, looks products up in the catalog
/// - **Order**: checkout, snapshots and clears a cart
///
/// ```ignore
/// let system = ShopSystem::start(&ShopConfig::from_env()?).await?;
/// let cart = system.cart_client.open_cart("session-key").await?;
/// system.cart_client.add_item(cart, product_id).await?;
/// let order = system.order_client.checkout(cart).await?;
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    pub product_client: ProductClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,

    /// Ids of the products loaded by [`ShopSystem::start`], in seed order.
    pub seeded: Vec<ProductId>,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Spawns all resources with an empty catalog.
    pub fn new(config: &ShopConfig) -> Self {
        // 1. Create actors (no dependencies yet)
        let (product_actor, product_client) = crate::product_actor::new(config.buffer_size);
        let (cart_actor, cart_client) = crate::cart_actor::new(config.buffer_size, config.shipping);
        let (order_actor, order_client) = crate::order_actor::new(config.buffer_size);

        // 2. Start them with their dependencies injected
        let product_handle = tokio::spawn(product_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(product_client.clone()));
        let order_handle = tokio::spawn(order_actor.run(cart_client.clone()));

        Self {
            product_client,
            cart_client,
            order_client,
            seeded: Vec::new(),
            // Dependents first so shutdown awaits them before their dependencies
            handles: vec![order_handle, cart_handle, product_handle],
        }
    }

    /// Spawns all resources and seeds the catalog named by `config`.
    pub async fn start(config: &ShopConfig) -> Result<Self, ShopError> {
        let entries = config.catalog()?;
        let mut system = Self::new(config);
        system.seeded = system.product_client.seed(entries).await?;
        Ok(system)
    }

    /// Drops every client and waits for the resource loops to drain.
    ///
    /// Each loop stops once its channel closes. The Order loop holds a
    /// `CartClient` and the cart loop a `ProductClient`, so they finish in
    /// dependency order without an explicit stop message. Clients cloned
    /// elsewhere must be dropped too or this waits for them.
    pub async fn shutdown(self) -> Result<(), ShopError> {
        info!("Shutting down shop...");
        drop(self.order_client);
        drop(self.cart_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(ShopError::Shutdown(e.to_string()));
            }
        }

        info!("Shop shutdown complete.");
        Ok(())
    }
}
