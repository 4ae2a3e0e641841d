//! Walks a visitor through the shop: browse, fill a cart, change their mind,
//! check out.

use cart_engine::framework::ActorClient;
use cart_engine::lifecycle::{setup_tracing, ShopConfig, ShopSystem};
use cart_engine::model::CartTotals;
use std::error::Error;
use tracing::{info, warn, Instrument};

fn log_totals(stage: &str, totals: &CartTotals) {
    info!(
        stage,
        subtotal = %totals.subtotal,
        shipping = %totals.shipping,
        total = %totals.total,
        "Cart totals"
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = ShopConfig::from_env()?;
    let system = ShopSystem::start(&config).await?;
    info!(products = system.seeded.len(), "Shop started");

    let span = tracing::info_span!("checkout_demo");
    async {
        let carts = &system.cart_client;
        let cart = carts.open_cart("demo-session").await?;

        let &[rug, stand, ..] = system.seeded.as_slice() else {
            return Err("catalog needs at least two products".into());
        };
        carts.add_item(cart, rug).await?;
        carts.add_item(cart, stand).await?;
        log_totals("two items", &carts.totals(cart).await?);

        carts.update_quantity(cart, rug, 0).await?;
        log_totals("rug removed", &carts.totals(cart).await?);

        if let Some(&sold_out) = system.seeded.last() {
            if !system.product_client.check_stock(sold_out).await? {
                if let Err(e) = carts.add_item(cart, sold_out).await {
                    warn!(error = %e, "Add refused");
                }
            }
        }

        let order_id = system.order_client.checkout(cart).await?;
        if let Some(order) = system.order_client.get(order_id).await? {
            info!(
                %order_id,
                lines = order.lines.len(),
                total = %order.totals.total,
                "Order placed"
            );
        }
        log_totals("after checkout", &carts.totals(cart).await?);

        carts.close_cart(cart).await?;
        Ok::<(), Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
