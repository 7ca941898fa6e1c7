//! # Checkout Commands
//!
//! Drives the checkout state machine and owns the one side-effecting
//! operation in the system: order submission.
//!
//! ## Submission Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    place_order                                          │
//! │                                                                         │
//! │  Phase 1 (under locks, synchronous):                                    │
//! │    1. ReviewingCart?  else CheckoutError                                │
//! │    2. Cart non-empty? else EmptyCart (NO transition)                    │
//! │    3. Context valid?  else ValidationError (NO transition)              │
//! │    4. Freeze OrderDraft = lines + pricing + context                     │
//! │    5. checkout = Processing                                             │
//! │                                                                         │
//! │  Phase 2 (no locks, async):                                             │
//! │    6. submit_order(&draft)  ← exactly once per Processing entry,        │
//! │                               never retried, never recomputed           │
//! │                                                                         │
//! │  Phase 3 (under locks):                                                 │
//! │    7a. Ok  → Complete(order_number), cart cleared, promo cleared        │
//! │    7b. Err → ReviewingCart, cart INTACT, error surfaced                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::commands::cart::CartResponse;
use crate::commands::price_cart;
use crate::error::{ApiError, ErrorCode};
use crate::state::{CartState, SessionState};
use ovenfresh_backend::{CatalogProvider, OrderBackend, OrderDraft};
use ovenfresh_core::pricing::PricingBreakdown;
use ovenfresh_core::types::CustomizationOptions;
use ovenfresh_core::validation::validate_order_context;
use ovenfresh_core::{CheckoutState, CoreError, OrderContext, Product};

/// What the confirmation screen renders after a successful order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: String,
    pub order_number: String,
    pub pricing: PricingBreakdown,
}

/// Returns the current checkout state.
pub fn get_checkout_state(session: &SessionState) -> CheckoutState {
    session.with_session(|s| s.checkout.clone())
}

/// Browsing → Customizing: opens the customization screen for a product.
pub async fn begin_customizing(
    catalog: &dyn CatalogProvider,
    session: &SessionState,
    product_id: i64,
) -> Result<Product, ApiError> {
    debug!(product_id, "begin_customizing command");

    let product = catalog
        .get_by_id(product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    if !product.is_active {
        return Err(ApiError::validation("Product is not available for sale"));
    }

    session.with_session_mut(|s| {
        s.checkout = s.checkout.begin_customizing(product_id)?;
        Ok::<(), ApiError>(())
    })?;

    Ok(product)
}

/// Customizing → Browsing without adding anything.
pub fn cancel_customizing(session: &SessionState) -> Result<CheckoutState, ApiError> {
    debug!("cancel_customizing command");

    session.with_session_mut(|s| {
        s.checkout = s.checkout.cancel_customizing()?;
        Ok(s.checkout.clone())
    })
}

/// Customizing → Browsing, adding the customized product to the cart.
///
/// The product id comes from the checkout state itself, so the frontend
/// cannot confirm a different product than the one being customized.
pub async fn confirm_customization(
    catalog: &dyn CatalogProvider,
    cart: &CartState,
    session: &SessionState,
    quantity: Option<i64>,
    customization: CustomizationOptions,
) -> Result<CartResponse, ApiError> {
    debug!("confirm_customization command");

    let product_id = session.with_session(|s| match &s.checkout {
        CheckoutState::Customizing { product_id } => Ok(*product_id),
        other => Err(ApiError::new(
            ErrorCode::CheckoutError,
            format!("Cannot confirm add to cart while {}", other.label()),
        )),
    })?;

    let response = super::cart::add_to_cart(
        catalog,
        cart,
        session,
        product_id,
        quantity,
        customization,
    )
    .await?;

    session.with_session_mut(|s| {
        s.checkout = s.checkout.confirm_add()?;
        Ok::<(), ApiError>(())
    })?;

    Ok(response)
}

/// Browsing → ReviewingCart: opens checkout (quick-add items skip the
/// customization screen entirely).
pub fn open_review(session: &SessionState) -> Result<CheckoutState, ApiError> {
    debug!("open_review command");

    session.with_session_mut(|s| {
        s.checkout = s.checkout.open_review()?;
        Ok(s.checkout.clone())
    })
}

/// ReviewingCart → Browsing: customer backs out of checkout.
pub fn close_review(session: &SessionState) -> Result<CheckoutState, ApiError> {
    debug!("close_review command");

    session.with_session_mut(|s| {
        s.checkout = s.checkout.close_review()?;
        Ok(s.checkout.clone())
    })
}

/// Stores the fulfillment selections (pickup/delivery, option, date, time,
/// address). Validated here so the review screen can surface problems
/// early, and validated again inside `place_order`.
pub fn set_order_context(
    session: &SessionState,
    context: OrderContext,
) -> Result<(), ApiError> {
    debug!(order_type = ?context.order_type, "set_order_context command");

    if session.is_processing() {
        return Err(ApiError::cart_frozen());
    }

    validate_order_context(&context).map_err(CoreError::from)?;
    session.with_session_mut(|s| s.context = context);
    Ok(())
}

/// Places the order: freezes the snapshot, enters Processing, submits, and
/// settles to Complete or rolls back to ReviewingCart.
///
/// ## Guarantees
/// - An empty cart never leaves ReviewingCart
/// - The submitted snapshot is computed at the moment Processing is
///   entered, never recomputed mid-flight
/// - The backend is invoked at most once per Processing entry; failures
///   surface to the customer with the cart intact
pub async fn place_order(
    backend: &dyn OrderBackend,
    cart: &CartState,
    session: &SessionState,
) -> Result<OrderConfirmation, ApiError> {
    debug!("place_order command");

    // Phase 1: guard and freeze the snapshot under both locks.
    let draft = session.with_session_mut(|s| {
        cart.with_cart(|c| {
            let next = s.checkout.place_order(c.is_empty())?;
            validate_order_context(&s.context).map_err(CoreError::from)?;

            let draft = OrderDraft {
                lines: c.lines.clone(),
                pricing: price_cart(c, s),
                context: s.context.clone(),
                placed_at: Utc::now(),
            };
            s.checkout = next;
            Ok::<OrderDraft, ApiError>(draft)
        })
    })?;

    info!(
        lines = draft.lines.len(),
        total_cents = draft.pricing.total_cents,
        "order submission started"
    );

    // Phase 2: the one submission for this Processing entry. No locks held.
    match backend.submit_order(&draft).await {
        Ok(receipt) => {
            session.with_session_mut(|s| {
                cart.with_cart_mut(|c| {
                    s.checkout = s.checkout.settle(receipt.order_number.as_str())?;
                    c.clear();
                    s.promo = None;
                    Ok::<(), ApiError>(())
                })
            })?;

            info!(
                order_id = %receipt.order_id,
                order_number = %receipt.order_number,
                "order complete"
            );

            Ok(OrderConfirmation {
                order_id: receipt.order_id,
                order_number: receipt.order_number,
                pricing: draft.pricing,
            })
        }
        Err(err) => {
            session.with_session_mut(|s| {
                s.checkout = s.checkout.fail_submission()?;
                Ok::<(), ApiError>(())
            })?;

            warn!("order submission failed; cart preserved");
            Err(err.into())
        }
    }
}

/// Complete → Browsing: clears the cart and all transient order state so a
/// new add starts a session indistinguishable from initial load.
pub fn continue_shopping(
    cart: &CartState,
    session: &SessionState,
) -> Result<CheckoutState, ApiError> {
    debug!("continue_shopping command");

    let state = session.with_session_mut(|s| {
        s.checkout = s.checkout.continue_shopping()?;
        s.reset();
        Ok::<CheckoutState, ApiError>(s.checkout.clone())
    })?;

    cart.with_cart_mut(|c| c.clear());
    Ok(state)
}

/// Handles click-outside / Escape. Honored only for states where dismissal
/// is safe; an in-flight submission and the confirmation screen ignore it.
pub fn dismiss_overlay(session: &SessionState) -> Result<CheckoutState, ApiError> {
    debug!("dismiss_overlay command");

    session.with_session_mut(|s| {
        if !s.checkout.can_dismiss() {
            return Err(ApiError::new(
                ErrorCode::CheckoutError,
                format!("Cannot dismiss while {}", s.checkout.label()),
            ));
        }

        s.checkout = match &s.checkout {
            CheckoutState::Customizing { .. } => s.checkout.cancel_customizing()?,
            CheckoutState::ReviewingCart => s.checkout.close_review()?,
            _ => s.checkout.clone(),
        };
        Ok(s.checkout.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::commands::promo::apply_promo_code;
    use ovenfresh_backend::{BackendError, MockOrderBackend, StaticCatalog};

    async fn seeded_cart() -> (StaticCatalog, CartState, SessionState) {
        let catalog = StaticCatalog::bakery_menu();
        let cart = CartState::new();
        let session = SessionState::new();

        // 2 × Sourdough Boule ($8.50) = $17.00
        add_to_cart(&catalog, &cart, &session, 1, Some(2), Default::default())
            .await
            .unwrap();

        (catalog, cart, session)
    }

    #[tokio::test]
    async fn test_place_order_happy_path() {
        let (_catalog, cart, session) = seeded_cart().await;
        let backend = MockOrderBackend::new();

        open_review(&session).unwrap();
        let confirmation = place_order(&backend, &cart, &session).await.unwrap();

        assert!(confirmation.order_number.starts_with("OF-"));
        assert_eq!(confirmation.pricing.subtotal_cents, 1700);
        assert_eq!(confirmation.pricing.total_cents, 1836);

        // Cart cleared, state Complete with the settled order number.
        assert!(cart.with_cart(|c| c.is_empty()));
        match get_checkout_state(&session) {
            CheckoutState::Complete { order_number } => {
                assert_eq!(order_number, confirmation.order_number)
            }
            other => panic!("expected Complete, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_cart_never_leaves_review() {
        let cart = CartState::new();
        let session = SessionState::new();
        let backend = MockOrderBackend::new();

        open_review(&session).unwrap();
        let err = place_order(&backend, &cart, &session).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert_eq!(get_checkout_state(&session), CheckoutState::ReviewingCart);
    }

    #[tokio::test]
    async fn test_submission_failure_returns_to_review_with_cart_intact() {
        let (_catalog, cart, session) = seeded_cart().await;
        let backend = MockOrderBackend::new();
        backend.fail_next(BackendError::Unavailable("oven offline".to_string()));

        open_review(&session).unwrap();
        let err = place_order(&backend, &cart, &session).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::SubmissionError);
        assert_eq!(get_checkout_state(&session), CheckoutState::ReviewingCart);
        assert_eq!(cart.with_cart(|c| c.total_quantity()), 2);

        // The customer can retry manually; this is a NEW Processing entry.
        assert!(place_order(&backend, &cart, &session).await.is_ok());
    }

    #[tokio::test]
    async fn test_continue_shopping_resets_session() {
        let (catalog, cart, session) = seeded_cart().await;
        let backend = MockOrderBackend::new();
        apply_promo_code(&session, "WELCOME10").unwrap();

        open_review(&session).unwrap();
        place_order(&backend, &cart, &session).await.unwrap();
        continue_shopping(&cart, &session).unwrap();

        assert_eq!(get_checkout_state(&session), CheckoutState::Browsing);
        assert!(cart.with_cart(|c| c.is_empty()));
        assert!(session.with_session(|s| s.promo.is_none()));

        // A new add starts from a state identical to initial load.
        let response = add_to_cart(&catalog, &cart, &session, 4, None, Default::default())
            .await
            .unwrap();
        assert_eq!(response.totals.line_count, 1);
        assert_eq!(response.totals.discount_cents, 0);
    }

    #[tokio::test]
    async fn test_customization_round_trip() {
        let catalog = StaticCatalog::bakery_menu();
        let cart = CartState::new();
        let session = SessionState::new();

        let product = begin_customizing(&catalog, &session, 8).await.unwrap();
        assert_eq!(product.name, "Classic Carrot Cake");

        let response = confirm_customization(
            &catalog,
            &cart,
            &session,
            Some(1),
            CustomizationOptions::default(),
        )
        .await
        .unwrap();

        assert_eq!(response.lines[0].product_id, 8);
        assert_eq!(get_checkout_state(&session), CheckoutState::Browsing);
    }

    #[tokio::test]
    async fn test_cancel_customizing() {
        let catalog = StaticCatalog::bakery_menu();
        let session = SessionState::new();

        begin_customizing(&catalog, &session, 4).await.unwrap();
        cancel_customizing(&session).unwrap();
        assert_eq!(get_checkout_state(&session), CheckoutState::Browsing);
    }

    #[tokio::test]
    async fn test_delivery_requires_address() {
        use chrono::{NaiveDate, NaiveTime};
        use ovenfresh_core::types::{DeliveryOption, OrderType};

        let session = SessionState::new();
        let context = OrderContext {
            order_type: OrderType::Delivery,
            delivery_option: DeliveryOption::Standard,
            delivery_date: NaiveDate::from_ymd_opt(2026, 8, 8).unwrap(),
            delivery_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            delivery_address: None,
        };

        let err = set_order_context(&session, context).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_dismiss_rules() {
        let (_catalog, _cart, session) = seeded_cart().await;

        // ReviewingCart dismisses back to browsing.
        open_review(&session).unwrap();
        assert_eq!(dismiss_overlay(&session).unwrap(), CheckoutState::Browsing);

        // Processing refuses dismissal outright.
        session.with_session_mut(|s| s.checkout = CheckoutState::Processing);
        assert_eq!(
            dismiss_overlay(&session).unwrap_err().code,
            ErrorCode::CheckoutError
        );
    }
}
