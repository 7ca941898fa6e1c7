//! # Pricing Calculator
//!
//! Pure composition of subtotal, discount, tax, and delivery fee into the
//! order total.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal (from CartEngine, gift surcharges included)                   │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  discount = subtotal × promo.discount_bps                               │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  tax = (subtotal − discount) × 8%                                       │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  delivery_fee = 0 (pickup)                                              │
//! │               | 0 (promo waives shipping)                               │
//! │               | option fee (standard/scheduled $4.99, express $7.99)    │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  total = subtotal − discount + tax + delivery_fee                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The total can never go negative: the discount is a fraction of the
//! subtotal and every other term is non-negative.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::promo::AppliedPromo;
use crate::types::{DeliveryOption, OrderType};
use crate::SALES_TAX;

// =============================================================================
// Pricing Breakdown
// =============================================================================

/// The priced-out order, in cents. Full precision is kept internally;
/// rounding to two decimals happens only at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub tax_cents: i64,
    pub delivery_fee_cents: i64,
    pub total_cents: i64,
}

impl PricingBreakdown {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the discount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    /// Returns the tax as Money.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    /// Returns the delivery fee as Money.
    #[inline]
    pub fn delivery_fee(&self) -> Money {
        Money::from_cents(self.delivery_fee_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Prices out an order from the cart subtotal and checkout selections.
///
/// Pure function: same inputs, same breakdown. The command layer calls this
/// for live cart display and once more to freeze the snapshot handed to the
/// order backend.
///
/// ## Example
/// ```rust
/// use ovenfresh_core::money::Money;
/// use ovenfresh_core::pricing::compute_totals;
/// use ovenfresh_core::promo::validate_code;
/// use ovenfresh_core::types::{DeliveryOption, OrderType};
///
/// let promo = validate_code("WELCOME10").unwrap();
/// let breakdown = compute_totals(
///     Money::from_cents(10000), // $100.00
///     Some(&promo),
///     OrderType::Pickup,
///     DeliveryOption::Standard,
/// );
///
/// assert_eq!(breakdown.discount_cents, 1000); // $10.00
/// assert_eq!(breakdown.tax_cents, 720);       // 8% of $90.00
/// assert_eq!(breakdown.total_cents, 9720);    // $97.20
/// ```
pub fn compute_totals(
    subtotal: Money,
    promo: Option<&AppliedPromo>,
    order_type: OrderType,
    delivery_option: DeliveryOption,
) -> PricingBreakdown {
    let discount = match promo {
        Some(p) if p.discount_bps > 0 => subtotal.percentage_of(p.discount_bps),
        _ => Money::zero(),
    };

    let taxable_base = subtotal - discount;
    let tax = taxable_base.calculate_tax(SALES_TAX);

    let delivery_fee = match order_type {
        OrderType::Pickup => Money::zero(),
        OrderType::Delivery => {
            if promo.is_some_and(|p| p.free_shipping) {
                Money::zero()
            } else {
                delivery_option.fee()
            }
        }
    };

    let total = taxable_base + tax + delivery_fee;

    PricingBreakdown {
        subtotal_cents: subtotal.cents(),
        discount_cents: discount.cents(),
        tax_cents: tax.cents(),
        delivery_fee_cents: delivery_fee.cents(),
        total_cents: total.cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
