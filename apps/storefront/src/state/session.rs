//! # Session State
//!
//! The checkout-side of the session: where the customer is in the flow,
//! which promo is applied, and how the order will be fulfilled.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  • At most ONE promo is applied; applying another replaces it           │
//! │  • While checkout is Processing, cart/promo/context mutations are       │
//! │    rejected by the command layer (the submitted snapshot must match     │
//! │    what is charged)                                                     │
//! │  • Checkout state only changes through the core transition methods      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{NaiveTime, Utc};

use ovenfresh_core::{AppliedPromo, CheckoutState, OrderContext};

/// Everything checkout-related that is not the cart itself.
#[derive(Debug, Clone)]
pub struct Session {
    /// Where the customer is in the ordering journey.
    pub checkout: CheckoutState,

    /// The active promo, if any. Replaced - never stacked.
    pub promo: Option<AppliedPromo>,

    /// Fulfillment selections (pickup/delivery, date, time, address).
    pub context: OrderContext,
}

impl Session {
    /// Fresh session: browsing, no promo, pickup at noon today.
    pub fn new() -> Self {
        Session {
            checkout: CheckoutState::default(),
            promo: None,
            context: default_context(),
        }
    }

    /// Resets the transient order state after "continue shopping".
    /// The cart is cleared separately by the command layer.
    pub fn reset(&mut self) {
        self.promo = None;
        self.context = default_context();
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

fn default_context() -> OrderContext {
    // Noon today until the customer picks a slot; validation happens at
    // checkout, not here.
    let noon = NaiveTime::from_hms_opt(12, 0, 0).expect("static time");
    OrderContext::pickup(Utc::now().date_naive(), noon)
}

/// Shared session state.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a fresh session state.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session::new())),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }

    /// Whether an order submission is currently in flight.
    pub fn is_processing(&self) -> bool {
        self.with_session(|s| s.checkout.is_processing())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovenfresh_core::validate_code;

    #[test]
    fn test_fresh_session() {
        let state = SessionState::new();
        state.with_session(|s| {
            assert_eq!(s.checkout, CheckoutState::Browsing);
            assert!(s.promo.is_none());
            assert!(!s.context.requires_address());
        });
        assert!(!state.is_processing());
    }

    #[test]
    fn test_promo_slot_replaces() {
        let state = SessionState::new();

        state.with_session_mut(|s| s.promo = Some(validate_code("SAVE15").unwrap()));
        state.with_session_mut(|s| s.promo = Some(validate_code("WELCOME10").unwrap()));

        state.with_session(|s| {
            assert_eq!(s.promo.as_ref().unwrap().code, "WELCOME10");
        });
    }

    #[test]
    fn test_reset_clears_transient_state() {
        let state = SessionState::new();
        state.with_session_mut(|s| {
            s.promo = Some(validate_code("FREESHIP").unwrap());
            s.reset();
        });

        state.with_session(|s| assert!(s.promo.is_none()));
    }
}
