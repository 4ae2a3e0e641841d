//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`.
//!
//! Resource loops log with an `entity_type` field (`Product`, `CartSession`,
//! `Order`) instead of module paths, and client methods open a span per call,
//! so a checkout reads as one nested flow:
//!
//! ```text
//! INFO checkout_demo:checkout: Sending checkout to actor
//! INFO Action ok entity_type="CartSession" id=cart_1
//! INFO Cart snapshotted for order order_id=order_1 cart_id=cart_1 lines=1 total=34.99
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```
//!
//! ```bash
//! RUST_LOG=info cargo run    # lifecycle and outcomes
//! RUST_LOG=debug cargo run   # plus request payloads and cart state after each action
//! ```

/// Initializes the global subscriber. Call once, from the binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
