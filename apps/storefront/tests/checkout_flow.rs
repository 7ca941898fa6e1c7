//! End-to-end checkout flow tests against the public command layer.
//!
//! These exercise the same surface the frontend uses: catalog lookups, cart
//! mutations, promo application, and the full place-order lifecycle with
//! the mock backend's simulated settlement.

use std::time::Duration;

use ovenfresh_backend::{BackendError, MockOrderBackend, StaticCatalog};
use ovenfresh_core::types::CustomizationOptions;
use ovenfresh_core::{CheckoutState, Product};
use ovenfresh_storefront::commands::{cart as cart_cmds, checkout, promo};
use ovenfresh_storefront::error::ErrorCode;
use ovenfresh_storefront::state::{CartState, SessionState};

fn priced_product(id: i64, price_cents: i64) -> Product {
    Product {
        id,
        name: format!("Test Product {}", id),
        category: "cakes".to_string(),
        price_cents,
        is_vegan: false,
        is_gluten_free: false,
        allergens: vec![],
        rating: 5.0,
        is_active: true,
    }
}

/// WELCOME10 on a $100.00 pickup order: discount $10.00, tax $7.20 (8% of
/// $90.00), no delivery fee, total $97.20.
#[tokio::test]
async fn welcome10_pickup_totals() {
    let catalog = StaticCatalog::new(vec![priced_product(1, 10000)]);
    let cart = CartState::new();
    let session = SessionState::new();
    let backend = MockOrderBackend::new();

    cart_cmds::add_to_cart(
        &catalog,
        &cart,
        &session,
        1,
        None,
        CustomizationOptions::default(),
    )
    .await
    .unwrap();
    promo::apply_promo_code(&session, "WELCOME10").unwrap();

    checkout::open_review(&session).unwrap();
    let confirmation = checkout::place_order(&backend, &cart, &session)
        .await
        .unwrap();

    assert_eq!(confirmation.pricing.subtotal_cents, 10000);
    assert_eq!(confirmation.pricing.discount_cents, 1000);
    assert_eq!(confirmation.pricing.tax_cents, 720);
    assert_eq!(confirmation.pricing.delivery_fee_cents, 0);
    assert_eq!(confirmation.pricing.total_cents, 9720);
}

/// Applying SAVE15 then WELCOME10 on a $50.00 cart replaces the discount:
/// the final discount is $5.00, never $12.50.
#[tokio::test]
async fn promos_replace_instead_of_stacking() {
    let catalog = StaticCatalog::new(vec![priced_product(1, 2500)]);
    let cart = CartState::new();
    let session = SessionState::new();

    cart_cmds::add_to_cart(&catalog, &cart, &session, 1, Some(2), Default::default())
        .await
        .unwrap();

    promo::apply_promo_code(&session, "SAVE15").unwrap();
    let review = cart_cmds::get_cart(&cart, &session);
    assert_eq!(review.totals.discount_cents, 750);

    promo::apply_promo_code(&session, "WELCOME10").unwrap();
    let review = cart_cmds::get_cart(&cart, &session);
    assert_eq!(review.totals.discount_cents, 500);
}

/// FREESHIP waives the delivery fee for a standard delivery regardless of
/// subtotal.
#[tokio::test]
async fn freeship_waives_standard_delivery_fee() {
    use chrono::{NaiveDate, NaiveTime};
    use ovenfresh_core::types::{DeliveryOption, OrderContext};

    let catalog = StaticCatalog::new(vec![priced_product(1, 300)]);
    let cart = CartState::new();
    let session = SessionState::new();

    cart_cmds::add_to_cart(&catalog, &cart, &session, 1, None, Default::default())
        .await
        .unwrap();

    checkout::set_order_context(
        &session,
        OrderContext::delivery(
            DeliveryOption::Standard,
            NaiveDate::from_ymd_opt(2026, 8, 8).unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            "12 Rye Lane",
        ),
    )
    .unwrap();

    let review = cart_cmds::get_cart(&cart, &session);
    assert_eq!(review.totals.delivery_fee_cents, 499);

    promo::apply_promo_code(&session, "FREESHIP").unwrap();
    let review = cart_cmds::get_cart(&cart, &session);
    assert_eq!(review.totals.delivery_fee_cents, 0);
}

/// While the submission is in flight the cart is frozen; mutations fail
/// with CART_FROZEN and the settled order matches the reviewed snapshot.
#[tokio::test(start_paused = true)]
async fn cart_is_frozen_while_order_is_in_flight() {
    let catalog = StaticCatalog::bakery_menu();
    let cart = CartState::new();
    let session = SessionState::new();
    let backend = MockOrderBackend::new().with_latency(Duration::from_millis(500));

    cart_cmds::add_to_cart(&catalog, &cart, &session, 1, Some(2), Default::default())
        .await
        .unwrap();
    let reviewed = cart_cmds::get_cart(&cart, &session);

    checkout::open_review(&session).unwrap();

    let submit = checkout::place_order(&backend, &cart, &session);
    let probe = async {
        // Fires 100ms into the 500ms settlement window.
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(session.is_processing());

        let err = cart_cmds::update_cart_line(&cart, &session, 1, 9).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartFrozen);
        let err = promo::apply_promo_code(&session, "WELCOME10").unwrap_err();
        assert_eq!(err.code, ErrorCode::CartFrozen);
    };

    let (confirmation, ()) = tokio::join!(submit, probe);
    let confirmation = confirmation.unwrap();

    // Charged exactly what was reviewed; the frozen window let nothing in.
    assert_eq!(
        confirmation.pricing.total_cents,
        reviewed.totals.total_cents
    );
}

/// A failed submission surfaces an error, returns to the review screen,
/// and leaves the cart untouched for a manual retry.
#[tokio::test]
async fn submission_failure_recovers_to_review() {
    let catalog = StaticCatalog::bakery_menu();
    let cart = CartState::new();
    let session = SessionState::new();
    let backend = MockOrderBackend::new();
    backend.fail_next(BackendError::Timeout);

    cart_cmds::add_to_cart(&catalog, &cart, &session, 4, Some(3), Default::default())
        .await
        .unwrap();
    checkout::open_review(&session).unwrap();

    let err = checkout::place_order(&backend, &cart, &session)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SubmissionError);
    assert_eq!(
        checkout::get_checkout_state(&session),
        CheckoutState::ReviewingCart
    );
    assert_eq!(cart.with_cart(|c| c.total_quantity()), 3);

    // Manual retry succeeds and clears the cart.
    let confirmation = checkout::place_order(&backend, &cart, &session)
        .await
        .unwrap();
    assert!(confirmation.order_number.starts_with("OF-"));
    assert!(cart.with_cart(|c| c.is_empty()));
}

/// Order numbers are unique across a session's orders.
#[tokio::test]
async fn sequential_orders_get_distinct_numbers() {
    let catalog = StaticCatalog::bakery_menu();
    let cart = CartState::new();
    let session = SessionState::new();
    let backend = MockOrderBackend::new();

    let mut numbers = Vec::new();
    for _ in 0..3 {
        cart_cmds::add_to_cart(&catalog, &cart, &session, 11, None, Default::default())
            .await
            .unwrap();
        checkout::open_review(&session).unwrap();
        let confirmation = checkout::place_order(&backend, &cart, &session)
            .await
            .unwrap();
        numbers.push(confirmation.order_number);
        checkout::continue_shopping(&cart, &session).unwrap();
    }

    numbers.sort();
    numbers.dedup();
    assert_eq!(numbers.len(), 3);
}
