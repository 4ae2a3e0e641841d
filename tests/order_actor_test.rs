use cart_engine::cart_actor::{CartActionResult, CartError};
use cart_engine::clients::CartClient;
use cart_engine::framework::mock::MockClient;
use cart_engine::framework::{ActorClient, FrameworkError};
use cart_engine::model::{
    CartId, CartLine, CartSession, CartSnapshot, CartTotals, Money, OrderId, OrderStatus, ProductId,
    ShippingPolicy,
};
use cart_engine::order_actor::{self, OrderError};

/// Real Order actor with a mocked cart resource.
/// Checkout must be a single Checkout action against the cart.
#[tokio::test]
async fn test_order_actor_with_mocked_cart() {
    let snapshot = CartSnapshot {
        lines: vec![CartLine {
            product_id: ProductId(2),
            name: "Quran Stand".into(),
            unit_price: Money::from_cents(3499),
            quantity: 1,
        }],
        totals: CartTotals {
            subtotal: Money::from_cents(3499),
            shipping: Money::from_cents(599),
            total: Money::from_cents(4098),
        },
    };

    let mut cart_mock = MockClient::<CartSession>::new();
    cart_mock
        .expect_action(CartId(1))
        .return_ok(CartActionResult::Checkout(snapshot.clone()));

    let (actor, orders) = order_actor::new(8);
    let handle = tokio::spawn(actor.run(CartClient::new(
        cart_mock.client(),
        ShippingPolicy::default(),
    )));

    let order_id = orders.checkout(CartId(1)).await.expect("Checkout failed");
    let order = orders.get(order_id).await.unwrap().expect("Order not found");
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.lines, snapshot.lines);
    assert_eq!(order.totals, snapshot.totals);

    cart_mock.verify();

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_checkout_stores_no_order() {
    let mut cart_mock = MockClient::<CartSession>::new();
    cart_mock
        .expect_action(CartId(7))
        .return_err(FrameworkError::EntityError(Box::new(CartError::EmptyCart(
            CartId(7),
        ))));

    let (actor, orders) = order_actor::new(8);
    tokio::spawn(actor.run(CartClient::new(
        cart_mock.client(),
        ShippingPolicy::default(),
    )));

    assert_eq!(
        orders.checkout(CartId(7)).await,
        Err(OrderError::EmptyCart(CartId(7)))
    );
    // The id allocated to the failed attempt holds nothing.
    assert!(orders.get(OrderId(1)).await.unwrap().is_none());
    cart_mock.verify();
}
