use cart_engine::cart_actor::{self, CartError};
use cart_engine::clients::{CartClient, ProductClient};
use cart_engine::framework::mock::MockClient;
use cart_engine::framework::{ActorClient, FrameworkError};
use cart_engine::model::{CartId, CartSession, Money, Product, ProductId, ShippingPolicy};

fn product(id: u32, cents: i64, in_stock: bool) -> Product {
    Product::new(ProductId(id), format!("Item {id}"), Money::from_cents(cents), in_stock)
}

/// Real Cart actor with a mocked catalog.
/// Every add looks the product up once; updates and removals never touch the catalog.
#[tokio::test]
async fn test_cart_actor_with_mocked_catalog() {
    let mut catalog = MockClient::<Product>::new();
    catalog.expect_get(ProductId(1)).return_ok(Some(product(1, 2999, true)));
    catalog.expect_get(ProductId(1)).return_ok(Some(product(1, 2999, true)));
    catalog.expect_get(ProductId(2)).return_ok(Some(product(2, 500, false)));
    catalog.expect_get(ProductId(3)).return_ok(None);

    let (actor, carts) = cart_actor::new(8, ShippingPolicy::default());
    let handle = tokio::spawn(actor.run(ProductClient::new(catalog.client())));

    let cart = carts.open_cart("mocked").await.unwrap();
    assert_eq!(carts.add_item(cart, ProductId(1)).await.unwrap(), 1);
    assert_eq!(carts.add_item(cart, ProductId(1)).await.unwrap(), 2);
    assert_eq!(
        carts.add_item(cart, ProductId(2)).await,
        Err(CartError::OutOfStock(ProductId(2)))
    );
    assert_eq!(
        carts.add_item(cart, ProductId(3)).await,
        Err(CartError::ProductNotFound(ProductId(3)))
    );

    assert!(!carts.update_quantity(cart, ProductId(3), 5).await.unwrap());
    assert!(!carts.remove_item(cart, ProductId(3)).await.unwrap());
    assert!(carts.update_quantity(cart, ProductId(1), 3).await.unwrap());
    assert_eq!(carts.totals(cart).await.unwrap().subtotal, Money::from_cents(8997));

    carts.clear(cart).await.unwrap();
    assert!(carts.lines(cart).await.unwrap().is_empty());

    catalog.verify();

    drop(carts);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_catalog_outage_is_reported_as_catalog_error() {
    let mut catalog = MockClient::<Product>::new();
    catalog.expect_get(ProductId(1)).return_err(FrameworkError::ActorClosed);

    let (actor, carts) = cart_actor::new(8, ShippingPolicy::default());
    tokio::spawn(actor.run(ProductClient::new(catalog.client())));

    let cart = carts.open_cart("outage").await.unwrap();
    let result = carts.add_item(cart, ProductId(1)).await;
    assert!(matches!(result, Err(CartError::Catalog(_))));
    assert!(carts.lines(cart).await.unwrap().is_empty());
    catalog.verify();
}

#[tokio::test]
async fn test_rotate_session_keeps_contents() {
    let mut catalog = MockClient::<Product>::new();
    catalog.expect_get(ProductId(1)).return_ok(Some(product(1, 1000, true)));

    let (actor, carts) = cart_actor::new(8, ShippingPolicy::default());
    tokio::spawn(actor.run(ProductClient::new(catalog.client())));

    let cart = carts.open_cart("anonymous").await.unwrap();
    carts.add_item(cart, ProductId(1)).await.unwrap();
    carts.rotate_session(cart, "signed-in").await.unwrap();

    let session = carts.get(cart).await.unwrap().expect("Cart missing");
    assert_eq!(session.session, "signed-in");
    assert_eq!(session.cart.quantity_of(ProductId(1)), 1);
}

/// Totals past the cents range saturate; neither this cart nor its neighbours
/// lose their actor.
#[tokio::test]
async fn test_huge_totals_keep_the_actor_alive() {
    let mut catalog = MockClient::<Product>::new();
    catalog
        .expect_get(ProductId(1))
        .return_ok(Some(product(1, 3_000_000_000, true)));
    catalog.expect_get(ProductId(2)).return_ok(Some(product(2, 1250, true)));

    let (actor, carts) = cart_actor::new(8, ShippingPolicy::default());
    tokio::spawn(actor.run(ProductClient::new(catalog.client())));

    let big = carts.open_cart("big-spender").await.unwrap();
    let other = carts.open_cart("neighbour").await.unwrap();
    carts.add_item(big, ProductId(1)).await.unwrap();
    carts.add_item(other, ProductId(2)).await.unwrap();

    assert!(carts.update_quantity(big, ProductId(1), i64::MAX).await.unwrap());
    let totals = carts.totals(big).await.unwrap();
    assert_eq!(totals.subtotal, Money::MAX);
    assert_eq!(totals.total, Money::MAX);

    assert_eq!(carts.totals(other).await.unwrap().subtotal, Money::from_cents(1250));
    catalog.verify();
}

#[tokio::test]
async fn test_close_cart_sends_delete() {
    let mut sessions = MockClient::<CartSession>::new();
    sessions.expect_delete(CartId(3)).return_ok(());
    sessions
        .expect_delete(CartId(4))
        .return_err(FrameworkError::NotFound(CartId(4).to_string()));

    let carts = CartClient::new(sessions.client(), ShippingPolicy::default());
    carts.close_cart(CartId(3)).await.unwrap();
    assert_eq!(
        carts.close_cart(CartId(4)).await,
        Err(CartError::NotFound("cart_4".into()))
    );
    sessions.verify();
}
