//! # Checkout State Machine
//!
//! The ordered sequence of states from browsing to order completion.
//!
//! ## States and Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Flow                                      │
//! │                                                                         │
//! │               begin_customizing                                         │
//! │      ┌───────────────────────────────┐                                  │
//! │      │                               ▼                                  │
//! │  ┌────────┐  confirm_add/cancel ┌────────────┐                          │
//! │  │Browsing│◄────────────────────│Customizing │                          │
//! │  └───┬────┘                     └────────────┘                          │
//! │      │ open_review                                                      │
//! │      ▼                                                                  │
//! │  ┌─────────────┐  place_order   ┌────────────┐  settle  ┌──────────┐    │
//! │  │ReviewingCart│───────────────►│ Processing │─────────►│ Complete │    │
//! │  └─────────────┘ (cart must be  └─────┬──────┘          └────┬─────┘    │
//! │      ▲            non-empty)          │                      │          │
//! │      │         fail_submission        │     continue_shopping│          │
//! │      └────────────────────────────────┘          (clears cart, promo)   │
//! │                                                      │                  │
//! │                                                      ▼                  │
//! │                                                  Browsing               │
//! │                                                                         │
//! │  RULES:                                                                 │
//! │  • Processing cannot be dismissed or cancelled (submission in flight)   │
//! │  • Complete is terminal except for continue_shopping                    │
//! │  • An invalid action never changes state                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every transition takes `&self` and returns the NEXT state, so a rejected
//! move leaves the caller holding the unchanged current state. The actual
//! submission side effect lives in the app layer; this module only encodes
//! which moves are legal.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Checkout State
// =============================================================================

/// Where the customer is in the ordering journey.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CheckoutState {
    /// Browsing the menu.
    #[default]
    Browsing,

    /// Customizing a product before adding it to the cart.
    #[serde(rename_all = "camelCase")]
    Customizing { product_id: i64 },

    /// Reviewing the cart and fulfillment details.
    ReviewingCart,

    /// Order submission in flight. The cart is frozen; no cancellation.
    Processing,

    /// Order placed. Terminal except for continue_shopping.
    #[serde(rename_all = "camelCase")]
    Complete { order_number: String },
}

impl CheckoutState {
    /// Short label for error messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            CheckoutState::Browsing => "browsing",
            CheckoutState::Customizing { .. } => "customizing",
            CheckoutState::ReviewingCart => "reviewing cart",
            CheckoutState::Processing => "processing",
            CheckoutState::Complete { .. } => "complete",
        }
    }

    /// Whether an in-flight submission exists right now.
    #[inline]
    pub fn is_processing(&self) -> bool {
        matches!(self, CheckoutState::Processing)
    }

    /// Whether modal dismissal (click-outside, Escape) is honored.
    ///
    /// Disabled while processing (no cancelling an in-flight order) and on
    /// the terminal screen (no accidental loss of the confirmation).
    pub fn can_dismiss(&self) -> bool {
        !matches!(
            self,
            CheckoutState::Processing | CheckoutState::Complete { .. }
        )
    }

    fn rejected(&self, action: &str) -> CoreError {
        CoreError::InvalidTransition {
            from: self.label().to_string(),
            action: action.to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Browsing → Customizing: a product was selected for customization.
    pub fn begin_customizing(&self, product_id: i64) -> CoreResult<CheckoutState> {
        match self {
            CheckoutState::Browsing => Ok(CheckoutState::Customizing { product_id }),
            _ => Err(self.rejected("customize a product")),
        }
    }

    /// Customizing → Browsing: cancel/escape without adding.
    pub fn cancel_customizing(&self) -> CoreResult<CheckoutState> {
        match self {
            CheckoutState::Customizing { .. } => Ok(CheckoutState::Browsing),
            _ => Err(self.rejected("cancel customization")),
        }
    }

    /// Customizing → Browsing: "add to cart" confirmed. The cart mutation
    /// itself happens in the command layer before this transition is stored.
    pub fn confirm_add(&self) -> CoreResult<CheckoutState> {
        match self {
            CheckoutState::Customizing { .. } => Ok(CheckoutState::Browsing),
            _ => Err(self.rejected("confirm add to cart")),
        }
    }

    /// Browsing → ReviewingCart: open checkout (quick-add items skip
    /// customization entirely).
    pub fn open_review(&self) -> CoreResult<CheckoutState> {
        match self {
            CheckoutState::Browsing => Ok(CheckoutState::ReviewingCart),
            _ => Err(self.rejected("open checkout")),
        }
    }

    /// ReviewingCart → Browsing: customer backs out of checkout.
    pub fn close_review(&self) -> CoreResult<CheckoutState> {
        match self {
            CheckoutState::ReviewingCart => Ok(CheckoutState::Browsing),
            _ => Err(self.rejected("close checkout")),
        }
    }

    /// ReviewingCart → Processing: place the order.
    ///
    /// An empty cart is rejected with [`CoreError::EmptyCart`] and NO state
    /// transition; the customer stays on the review screen with an error.
    pub fn place_order(&self, cart_is_empty: bool) -> CoreResult<CheckoutState> {
        match self {
            CheckoutState::ReviewingCart if cart_is_empty => Err(CoreError::EmptyCart),
            CheckoutState::ReviewingCart => Ok(CheckoutState::Processing),
            _ => Err(self.rejected("place order")),
        }
    }

    /// Processing → Complete: the submission settled successfully.
    /// The order number is generated at settlement time.
    pub fn settle(&self, order_number: impl Into<String>) -> CoreResult<CheckoutState> {
        match self {
            CheckoutState::Processing => Ok(CheckoutState::Complete {
                order_number: order_number.into(),
            }),
            _ => Err(self.rejected("settle order")),
        }
    }

    /// Processing → ReviewingCart: the submission failed. The cart stays
    /// intact and the customer sees the error on the review screen; failure
    /// is never silently treated as success.
    pub fn fail_submission(&self) -> CoreResult<CheckoutState> {
        match self {
            CheckoutState::Processing => Ok(CheckoutState::ReviewingCart),
            _ => Err(self.rejected("record submission failure")),
        }
    }

    /// Complete → Browsing: continue shopping. The command layer clears the
    /// cart and promo alongside this transition.
    pub fn continue_shopping(&self) -> CoreResult<CheckoutState> {
        match self {
            CheckoutState::Complete { .. } => Ok(CheckoutState::Browsing),
            _ => Err(self.rejected("continue shopping")),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
