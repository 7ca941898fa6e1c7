//! # Command Layer
//!
//! The operations the storefront frontend invokes. Each command is a plain
//! async function that declares exactly the state and collaborators it
//! needs - nothing reaches into ambient globals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Groups                                       │
//! │                                                                         │
//! │  catalog.rs   list_products, get_product                                │
//! │  cart.rs      get_cart, add_to_cart, update_cart_line,                  │
//! │               remove_from_cart, clear_cart                              │
//! │  promo.rs     apply_promo_code, remove_promo_code, current_promo        │
//! │  checkout.rs  begin_customizing, cancel_customizing,                    │
//! │               confirm_customization, open_review, close_review,         │
//! │               set_order_context, place_order, continue_shopping,        │
//! │               dismiss_overlay                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod promo;

use ovenfresh_core::pricing::{compute_totals, PricingBreakdown};
use ovenfresh_core::Cart;

use crate::state::Session;

/// Prices the cart against the session's promo and fulfillment selections.
///
/// Used for live cart display AND (exactly once per submission) to freeze
/// the snapshot handed to the order backend.
pub(crate) fn price_cart(cart: &Cart, session: &Session) -> PricingBreakdown {
    compute_totals(
        cart.subtotal(),
        session.promo.as_ref(),
        session.context.order_type,
        session.context.delivery_option,
    )
}
