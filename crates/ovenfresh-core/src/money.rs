//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart summing float prices drifts a cent at a time:                   │
//! │    3 × $4.25 + 8% tax = $13.770000000000001                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    All arithmetic happens in whole cents; dollars exist only            │
//! │    at the display boundary.                                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ovenfresh_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(425); // $4.25
//!
//! // Arithmetic operations
//! let line = price * 3;                        // $12.75
//! let with_gift = line + Money::from_cents(500); // $17.75
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for discounts and corrections
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// Product.price_cents ──► CartLine.unit_price ──► CartLine.line_total
///                                                       │
///         subtotal ──► discount ──► tax ──► delivery ──► total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use ovenfresh_core::money::Money;
    ///
    /// let price = Money::from_cents(425); // Represents $4.25
    /// assert_eq!(price.cents(), 425);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use ovenfresh_core::money::Money;
    ///
    /// let fee = Money::from_major_minor(4, 99); // $4.99
    /// assert_eq!(fee.cents(), 499);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount.
    ///
    /// ## Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  Integer math: (amount_cents × bps + 5000) / 10000                  │
    /// │                                                                     │
    /// │  The +5000 term rounds the half-cent boundary up instead of         │
    /// │  truncating, so $11.25 × 8% = $0.90 exactly, and $0.56 × 8%         │
    /// │  = 4.48¢ → 4¢ rather than drifting with repeated float rounding.    │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use ovenfresh_core::money::Money;
    /// use ovenfresh_core::types::TaxRate;
    ///
    /// let base = Money::from_cents(9000); // $90.00
    /// let rate = TaxRate::from_bps(800);  // 8%
    ///
    /// let tax = base.calculate_tax(rate);
    /// assert_eq!(tax.cents(), 720); // $7.20
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // Use i128 to prevent overflow on large amounts
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Returns a basis-point fraction of this amount.
    ///
    /// Used for percentage promo discounts: 1000 bps = 10%.
    ///
    /// ## Example
    /// ```rust
    /// use ovenfresh_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(10000); // $100.00
    /// let discount = subtotal.percentage_of(1000); // 10%
    /// assert_eq!(discount.cents(), 1000); // $10.00
    /// ```
    pub fn percentage_of(&self, bps: u32) -> Money {
        let amount = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(amount as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use ovenfresh_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(425); // $4.25
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 1275); // $12.75
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and receipts. Use frontend formatting for actual UI
/// display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over line totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(4, 99);
        assert_eq!(money.cents(), 499);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let lines = [
            Money::from_cents(425),
            Money::from_cents(1200),
            Money::from_cents(75),
        ];
        let total: Money = lines.into_iter().sum();
        assert_eq!(total.cents(), 1700);
    }

    #[test]
    fn test_tax_calculation_basic() {
        // $90.00 at 8% = $7.20
        let amount = Money::from_cents(9000);
        let rate = TaxRate::from_bps(800);
        let tax = amount.calculate_tax(rate);
        assert_eq!(tax.cents(), 720);
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // $0.56 at 8% = 4.48¢ → 4¢
        let amount = Money::from_cents(56);
        let rate = TaxRate::from_bps(800);
        assert_eq!(amount.calculate_tax(rate).cents(), 4);

        // $0.57 at 8% = 4.56¢ → 5¢
        let amount = Money::from_cents(57);
        assert_eq!(amount.calculate_tax(rate).cents(), 5);
    }

    #[test]
    fn test_percentage_of() {
        let subtotal = Money::from_cents(10000); // $100.00
        assert_eq!(subtotal.percentage_of(1000).cents(), 1000); // 10%
        assert_eq!(subtotal.percentage_of(1500).cents(), 1500); // 15%
        assert_eq!(subtotal.percentage_of(0).cents(), 0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 897);
    }

    /// Discount can never exceed the amount it is taken from: it is a
    /// basis-point fraction, capped at 10000 bps by the promo table.
    #[test]
    fn test_discount_bounded_by_subtotal() {
        let subtotal = Money::from_cents(12345);
        let full = subtotal.percentage_of(10000);
        assert_eq!(full.cents(), subtotal.cents());
        assert!(subtotal.percentage_of(9999).cents() <= subtotal.cents());
    }
}
