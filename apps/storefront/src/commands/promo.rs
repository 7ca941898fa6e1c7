//! # Promo Commands
//!
//! Promo code application for the checkout screen.
//!
//! ## Replace, Never Stack
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  apply "SAVE15"    → promo = SAVE15 (15%)                               │
//! │  apply "WELCOME10" → promo = WELCOME10 (10%)   ← SAVE15 is gone         │
//! │  apply "TYPO"      → InvalidPromo, promo STILL WELCOME10                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::SessionState;
use ovenfresh_core::{validate_code, AppliedPromo};

/// Validates a code and applies it to the session, replacing any promo that
/// was active before. A rejected code leaves the previous promo in place.
pub fn apply_promo_code(
    session: &SessionState,
    code: &str,
) -> Result<AppliedPromo, ApiError> {
    debug!(code, "apply_promo_code command");

    if session.is_processing() {
        return Err(ApiError::cart_frozen());
    }

    let promo = validate_code(code)?;

    session.with_session_mut(|s| {
        if let Some(previous) = &s.promo {
            info!(
                replaced = %previous.code,
                applied = %promo.code,
                "promo replaced"
            );
        } else {
            info!(applied = %promo.code, "promo applied");
        }
        s.promo = Some(promo.clone());
    });

    Ok(promo)
}

/// Removes the applied promo, if any.
pub fn remove_promo_code(session: &SessionState) -> Result<(), ApiError> {
    debug!("remove_promo_code command");

    if session.is_processing() {
        return Err(ApiError::cart_frozen());
    }

    session.with_session_mut(|s| s.promo = None);
    Ok(())
}

/// Returns the currently applied promo.
pub fn current_promo(session: &SessionState) -> Option<AppliedPromo> {
    session.with_session(|s| s.promo.clone())
}
