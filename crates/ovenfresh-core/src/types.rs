//! # Domain Types
//!
//! Core domain types used throughout the Ovenfresh order engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐  ┌─────────────────┐    │
//! │  │    Product      │   │ CustomizationOptions│  │  OrderContext   │    │
//! │  │  ─────────────  │   │  ─────────────────  │  │  ─────────────  │    │
//! │  │  id (i64)       │   │  size               │  │  order_type     │    │
//! │  │  name/category  │   │  special_instrs     │  │  delivery_option│    │
//! │  │  price_cents    │   │  gift (optional)    │  │  date/time/addr │    │
//! │  │  dietary flags  │   └─────────────────────┘  └─────────────────┘    │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │ DeliveryOption  │   │  GiftPackaging  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Standard $4.99 │   │  Standard  +$0  │       │
//! │  │  800 = 8%       │   │  Express  $7.99 │   │  Premium   +$5  │       │
//! │  └─────────────────┘   │  Scheduled $4.99│   │  Deluxe   +$10  │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8% (the storefront's flat sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A purchasable bakery product, supplied read-only by the catalog provider.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: i64,

    /// Display name shown on the menu and on order lines.
    pub name: String,

    /// Menu category ("breads", "pastries", "cakes", ...).
    pub category: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Contains no animal products.
    pub is_vegan: bool,

    /// Baked without gluten-containing flours.
    pub is_gluten_free: bool,

    /// Declared allergens ("wheat", "eggs", "tree nuts", ...).
    pub allergens: Vec<String>,

    /// Average customer rating, 0.0 to 5.0.
    pub rating: f32,

    /// Whether the product is currently offered (soft delete).
    pub is_active: bool,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Customization
// =============================================================================

/// Portion size for a customizable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

/// Gift packaging tier. The surcharge is charged once per cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum GiftPackaging {
    /// Plain box, no surcharge.
    #[default]
    Standard,
    /// Ribbon and card, +$5.00.
    Premium,
    /// Keepsake tin, +$10.00.
    Deluxe,
}

impl GiftPackaging {
    /// Returns the per-line surcharge for this tier.
    pub const fn surcharge(&self) -> Money {
        match self {
            GiftPackaging::Standard => Money::from_cents(0),
            GiftPackaging::Premium => Money::from_cents(500),
            GiftPackaging::Deluxe => Money::from_cents(1000),
        }
    }
}

/// Gift wrap details attached to a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GiftDetails {
    /// Message printed on the gift card.
    pub message: String,

    /// Packaging tier (drives the surcharge).
    pub packaging: GiftPackaging,
}

/// Per-line modifiers chosen at add-to-cart time.
///
/// ## Design Note
/// This is a closed, tagged type: every field and its validity is checked at
/// construction sites (see [`crate::validation`]) instead of at arbitrary
/// read sites.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationOptions {
    /// Portion size.
    pub size: Size,

    /// Free-form preparation notes (may be empty).
    pub special_instructions: String,

    /// Gift wrap, if requested.
    pub gift: Option<GiftDetails>,
}

impl CustomizationOptions {
    /// Gift-packaging surcharge for this customization (zero when no gift
    /// or standard packaging).
    pub fn gift_surcharge(&self) -> Money {
        self.gift
            .as_ref()
            .map(|g| g.packaging.surcharge())
            .unwrap_or_else(Money::zero)
    }
}

// =============================================================================
// Order Context
// =============================================================================

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Pickup,
    Delivery,
}

/// Delivery tier. Fees are meaningful only when `OrderType::Delivery`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    /// Next available window, $4.99.
    #[default]
    Standard,
    /// Priority courier, $7.99.
    Express,
    /// Customer-chosen window, $4.99.
    Scheduled,
}

impl DeliveryOption {
    /// Returns the delivery fee for this tier.
    pub const fn fee(&self) -> Money {
        match self {
            DeliveryOption::Standard | DeliveryOption::Scheduled => Money::from_cents(499),
            DeliveryOption::Express => Money::from_cents(799),
        }
    }
}

/// Fulfillment details gathered during checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderContext {
    /// Pickup or delivery.
    pub order_type: OrderType,

    /// Delivery tier (ignored for pickup).
    pub delivery_option: DeliveryOption,

    /// Requested fulfillment date.
    #[ts(as = "String")]
    pub delivery_date: NaiveDate,

    /// Requested fulfillment time of day.
    #[ts(as = "String")]
    pub delivery_time: NaiveTime,

    /// Street address; required iff `order_type` is Delivery.
    pub delivery_address: Option<String>,
}

impl OrderContext {
    /// Creates a pickup context for the given date and time.
    pub fn pickup(date: NaiveDate, time: NaiveTime) -> Self {
        OrderContext {
            order_type: OrderType::Pickup,
            delivery_option: DeliveryOption::default(),
            delivery_date: date,
            delivery_time: time,
            delivery_address: None,
        }
    }

    /// Creates a delivery context.
    pub fn delivery(
        option: DeliveryOption,
        date: NaiveDate,
        time: NaiveTime,
        address: impl Into<String>,
    ) -> Self {
        OrderContext {
            order_type: OrderType::Delivery,
            delivery_option: option,
            delivery_date: date,
            delivery_time: time,
            delivery_address: Some(address.into()),
        }
    }

    /// Whether this context needs a delivery address.
    #[inline]
    pub fn requires_address(&self) -> bool {
        self.order_type == OrderType::Delivery
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(rate.bps(), 800);
        assert!((rate.percentage() - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(8.0);
        assert_eq!(rate.bps(), 800);
    }

    #[test]
    fn test_gift_packaging_surcharges() {
        assert_eq!(GiftPackaging::Standard.surcharge().cents(), 0);
        assert_eq!(GiftPackaging::Premium.surcharge().cents(), 500);
        assert_eq!(GiftPackaging::Deluxe.surcharge().cents(), 1000);
    }

    #[test]
    fn test_customization_surcharge_requires_gift() {
        let plain = CustomizationOptions::default();
        assert_eq!(plain.gift_surcharge().cents(), 0);

        let wrapped = CustomizationOptions {
            gift: Some(GiftDetails {
                message: "Happy birthday!".to_string(),
                packaging: GiftPackaging::Deluxe,
            }),
            ..Default::default()
        };
        assert_eq!(wrapped.gift_surcharge().cents(), 1000);
    }

    #[test]
    fn test_delivery_fees() {
        assert_eq!(DeliveryOption::Standard.fee().cents(), 499);
        assert_eq!(DeliveryOption::Scheduled.fee().cents(), 499);
        assert_eq!(DeliveryOption::Express.fee().cents(), 799);
    }

    #[test]
    fn test_order_context_address_requirement() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let time = NaiveTime::from_hms_opt(10, 30, 0).unwrap();

        let pickup = OrderContext::pickup(date, time);
        assert!(!pickup.requires_address());
        assert!(pickup.delivery_address.is_none());

        let delivery =
            OrderContext::delivery(DeliveryOption::Express, date, time, "12 Rye Lane");
        assert!(delivery.requires_address());
        assert_eq!(delivery.delivery_address.as_deref(), Some("12 Rye Lane"));
    }

    #[test]
    fn test_customization_serde_round_trip() {
        let custom = CustomizationOptions {
            size: Size::Large,
            special_instructions: "sliced".to_string(),
            gift: Some(GiftDetails {
                message: "Congrats".to_string(),
                packaging: GiftPackaging::Premium,
            }),
        };

        let json = serde_json::to_string(&custom).unwrap();
        let back: CustomizationOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, custom);
    }
}
