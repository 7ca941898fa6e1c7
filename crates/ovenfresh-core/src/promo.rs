//! # Promotion Engine
//!
//! Validates promo codes against a fixed table and produces the discount
//! policy a code grants.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Customer types: " welcome10 "                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_promo_code → "WELCOME10"  (trim + upper-case)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Exact match against PROMO_TABLE — no partial matches                   │
//! │       │                                                                 │
//! │       ├── hit  → AppliedPromo { 10%, free_shipping: false }             │
//! │       │                                                                 │
//! │       └── miss → CoreError::InvalidPromoCode (applied promo unchanged)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stacking
//! At most one promo is active at any time. Applying a second valid code
//! REPLACES the first; the session layer owns the `Option<AppliedPromo>`
//! slot, this module only validates.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_promo_code;

// =============================================================================
// Promo Table
// =============================================================================

/// A table entry. Codes are stored upper-cased; lookups compare exactly
/// after normalizing the input the same way.
#[derive(Debug, Clone, Copy)]
pub struct PromoEntry {
    /// Upper-cased code customers type in.
    pub code: &'static str,

    /// Percentage discount in basis points (1000 = 10% off the subtotal).
    pub discount_bps: u32,

    /// Waives the delivery fee instead of (or in addition to) discounting.
    pub free_shipping: bool,

    /// Marketing copy shown next to the applied promo.
    pub description: &'static str,
}

/// The fixed promotion table.
///
/// SAVE15's description advertises a $50 minimum, but validation is an
/// unconditional lookup — the minimum is not enforced, matching the
/// storefront's observed behavior.
pub const PROMO_TABLE: &[PromoEntry] = &[
    PromoEntry {
        code: "WELCOME10",
        discount_bps: 1000,
        free_shipping: false,
        description: "10% off your first order",
    },
    PromoEntry {
        code: "SAVE15",
        discount_bps: 1500,
        free_shipping: false,
        description: "15% off orders over $50",
    },
    PromoEntry {
        code: "FREESHIP",
        discount_bps: 0,
        free_shipping: true,
        description: "Free delivery on your order",
    },
    PromoEntry {
        code: "BAKERSDOZEN",
        discount_bps: 500,
        free_shipping: false,
        description: "5% off for our regulars",
    },
];

// =============================================================================
// Applied Promo
// =============================================================================

/// The discount policy granted by a validated code.
///
/// Owned copy of the table row, safe to store in session state and
/// serialize to the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppliedPromo {
    /// The normalized code that was applied.
    pub code: String,

    /// Percentage discount in basis points.
    pub discount_bps: u32,

    /// Whether the delivery fee is waived.
    pub free_shipping: bool,

    /// Description for display.
    pub description: String,
}

impl From<&PromoEntry> for AppliedPromo {
    fn from(entry: &PromoEntry) -> Self {
        AppliedPromo {
            code: entry.code.to_string(),
            discount_bps: entry.discount_bps,
            free_shipping: entry.free_shipping,
            description: entry.description.to_string(),
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Validates a customer-entered code against the table.
///
/// ## Behavior
/// - Input is trimmed and upper-cased, then matched exactly
/// - Unknown codes return [`CoreError::InvalidPromoCode`]; the caller's
///   currently applied promo (if any) must be left unchanged
/// - Re-validating a new code is how replacement happens: the session
///   stores whichever `AppliedPromo` was returned last
pub fn validate_code(code: &str) -> CoreResult<AppliedPromo> {
    let normalized = validate_promo_code(code)?;

    PROMO_TABLE
        .iter()
        .find(|entry| entry.code == normalized)
        .map(AppliedPromo::from)
        .ok_or(CoreError::InvalidPromoCode { code: normalized })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let promo = validate_code("welcome10").unwrap();
        assert_eq!(promo.code, "WELCOME10");
        assert_eq!(promo.discount_bps, 1000);
        assert!(!promo.free_shipping);

        let promo = validate_code("  WeLcOmE10  ").unwrap();
        assert_eq!(promo.code, "WELCOME10");
    }

    #[test]
    fn test_no_partial_matches() {
        assert!(matches!(
            validate_code("WELCOME"),
            Err(CoreError::InvalidPromoCode { .. })
        ));
        assert!(matches!(
            validate_code("WELCOME100"),
            Err(CoreError::InvalidPromoCode { .. })
        ));
    }

    #[test]
    fn test_unknown_code() {
        let err = validate_code("NOPE").unwrap_err();
        match err {
            CoreError::InvalidPromoCode { code } => assert_eq!(code, "NOPE"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_free_shipping_entry() {
        let promo = validate_code("FREESHIP").unwrap();
        assert!(promo.free_shipping);
        assert_eq!(promo.discount_bps, 0);
    }

    /// SAVE15 applies unconditionally even though its description implies a
    /// $50 minimum; the minimum is intentionally not enforced.
    #[test]
    fn test_save15_has_no_minimum() {
        let promo = validate_code("SAVE15").unwrap();
        assert_eq!(promo.discount_bps, 1500);
        assert!(promo.description.contains("$50"));
    }

    #[test]
    fn test_malformed_input_is_validation_error() {
        assert!(matches!(
            validate_code(""),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            validate_code("TEN PERCENT"),
            Err(CoreError::Validation(_))
        ));
    }
}
