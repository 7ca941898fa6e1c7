//! # Cart Commands
//!
//! Cart manipulation for the storefront frontend.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐        │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│ Order    │        │
//! │  │  Cart    │     │          │     │ Review   │     │ Placed   │        │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘        │
//! │                        │                 │                              │
//! │                   add_to_cart       place_order                         │
//! │                   update_line       (checkout.rs)                       │
//! │                   remove_item                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                    │
//! │                                                      (back to empty)    │
//! │                                                                         │
//! │  FROZEN: every mutation below is rejected with CART_FROZEN while an     │
//! │  order submission is in flight, so the charged snapshot always matches  │
//! │  what the customer reviewed.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::price_cart;
use crate::error::ApiError;
use crate::state::{CartState, CartTotals, SessionState};
use ovenfresh_backend::CatalogProvider;
use ovenfresh_core::types::CustomizationOptions;
use ovenfresh_core::validation::{validate_gift_message, validate_special_instructions};
use ovenfresh_core::CartLine;

/// Cart response including lines and priced-out totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

/// Builds the response under both state locks.
fn cart_response(cart_state: &CartState, session_state: &SessionState) -> CartResponse {
    session_state.with_session(|session| {
        cart_state.with_cart(|cart| {
            let pricing = price_cart(cart, session);
            CartResponse {
                lines: cart.lines.clone(),
                totals: CartTotals::new(cart, &pricing),
            }
        })
    })
}

/// Rejects mutations while an order submission is in flight.
fn ensure_not_frozen(session_state: &SessionState) -> Result<(), ApiError> {
    if session_state.is_processing() {
        return Err(ApiError::cart_frozen());
    }
    Ok(())
}

/// Gets the current cart contents with totals.
pub fn get_cart(cart: &CartState, session: &SessionState) -> CartResponse {
    debug!("get_cart command");
    cart_response(cart, session)
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases, first customization wins
/// - Product not in cart: added as a new line
/// - Price is frozen at time of adding (won't change if the catalog updates)
///
/// ## Arguments
/// * `product_id` - Product to add
/// * `quantity` - Quantity to add (default: 1)
/// * `customization` - Size, instructions, optional gift wrap
pub async fn add_to_cart(
    catalog: &dyn CatalogProvider,
    cart: &CartState,
    session: &SessionState,
    product_id: i64,
    quantity: Option<i64>,
    customization: CustomizationOptions,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id, quantity, "add_to_cart command");

    ensure_not_frozen(session)?;

    validate_special_instructions(&customization.special_instructions)
        .map_err(ovenfresh_core::CoreError::from)?;
    if let Some(gift) = &customization.gift {
        validate_gift_message(&gift.message).map_err(ovenfresh_core::CoreError::from)?;
    }

    let product = catalog
        .get_by_id(product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    if !product.is_active {
        return Err(ApiError::validation("Product is not available for sale"));
    }

    cart.with_cart_mut(|c| c.add_item(&product, quantity, customization))?;

    Ok(cart_response(cart, session))
}

/// Sets the quantity of a line in the cart.
///
/// ## Behavior
/// - Quantity below 1 is rejected (the line is untouched); removing a line
///   goes through `remove_from_cart`
pub fn update_cart_line(
    cart: &CartState,
    session: &SessionState,
    product_id: i64,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, quantity, "update_cart_line command");

    ensure_not_frozen(session)?;
    cart.with_cart_mut(|c| c.update_quantity(product_id, quantity))?;

    Ok(cart_response(cart, session))
}

/// Removes a line from the cart. No-op if the product is not in the cart.
pub fn remove_from_cart(
    cart: &CartState,
    session: &SessionState,
    product_id: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, "remove_from_cart command");

    ensure_not_frozen(session)?;
    cart.with_cart_mut(|c| c.remove_item(product_id));

    Ok(cart_response(cart, session))
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - Customer empties the cart manually
/// - After an order completes (via `continue_shopping`)
pub fn clear_cart(cart: &CartState, session: &SessionState) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");

    ensure_not_frozen(session)?;
    cart.with_cart_mut(|c| c.clear());

    Ok(cart_response(cart, session))
}
