//! # Cart Engine
//!
//! Owns the mapping from product identity to quantity and the subtotal math.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Customer Action          Engine Call             Cart Change           │
//! │  ───────────────          ───────────             ───────────           │
//! │                                                                         │
//! │  Add to cart ────────────► add_item() ──────────► merge or push line    │
//! │                                                                         │
//! │  Change quantity ────────► update_quantity() ───► lines[i].qty = n      │
//! │                                                                         │
//! │  Remove line ────────────► remove_item() ───────► lines.retain(..)      │
//! │                                                                         │
//! │  Order completed ────────► clear() ─────────────► lines.clear()         │
//! │                                                                         │
//! │  NOTE: Lines keep insertion order; the first add wins the position      │
//! │        AND the customization when a later add merges into it.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CustomizationOptions, Product};
use crate::validation::validate_quantity;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Merge Policy
// =============================================================================

/// The cart's line-identity policy: two additions merge when this key matches.
///
/// Today the key is the product id alone, so adding the same product twice
/// with different customizations folds into one line that keeps the FIRST
/// customization. Keying by product id plus a customization hash would give
/// each variant its own line; that change belongs here and nowhere else.
#[inline]
pub fn merge_key(line: &CartLine) -> i64 {
    line.product_id
}

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the cart.
///
/// ## Design Notes
/// - `product_id`: reference back into the catalog
/// - `name`/`unit_price_cents`: frozen copies taken at add time, so later
///   catalog edits never retroactively change what the customer saw
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product id (catalog reference).
    pub product_id: i64,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price in cents at time of adding (frozen).
    /// This is critical: we lock in the price when the line is created.
    pub unit_price_cents: i64,

    /// Quantity in cart; always >= 1. A line reduced to zero is removed,
    /// never stored.
    pub quantity: i64,

    /// Modifiers captured when the line was created (first add wins).
    pub customization: CustomizationOptions,

    /// When this line was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product, freezing its price.
    pub fn from_product(
        product: &Product,
        quantity: i64,
        customization: CustomizationOptions,
    ) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity,
            customization,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total: unit price × quantity, plus the gift-packaging surcharge
    /// (charged once per line, not per unit).
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity) + self.customization.gift_surcharge()
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The customer's in-progress order.
///
/// ## Invariants
/// - Line identity is [`merge_key`] (adding a matching product increases
///   quantity and keeps the existing customization)
/// - Quantity is always >= 1
/// - Lines keep first-add insertion order
/// - Maximum distinct lines: 50; maximum quantity per line: 99
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in first-add order.
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - Matching line (see [`merge_key`]): quantity increases, the existing
    ///   customization is kept untouched
    /// - No matching line: a new line is appended with the product's price
    ///   frozen at this instant
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: i64,
        customization: CustomizationOptions,
    ) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let candidate = CartLine::from_product(product, quantity, customization);
        let key = merge_key(&candidate);

        if let Some(line) = self.lines.iter_mut().find(|l| merge_key(l) == key) {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(candidate);
        Ok(())
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `quantity < 1` is rejected with no state change; decrementing a
    ///   line to zero must go through [`Cart::remove_item`]
    /// - Unknown product id is an error
    pub fn update_quantity(&mut self, product_id: i64, quantity: i64) -> CoreResult<()> {
        if quantity < 1 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
            });
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
            .ok_or(CoreError::LineNotFound { product_id })?;

        line.quantity = quantity;
        Ok(())
    }

    /// Removes a line by product id. No-op when the product is not in the
    /// cart.
    pub fn remove_item(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Clears all lines. Used on successful order completion.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the subtotal: Σ line totals, gift surcharges included.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
