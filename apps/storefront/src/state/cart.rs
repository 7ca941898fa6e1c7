//! # Cart State
//!
//! Session wrapper around the core [`Cart`] engine.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. The command layer is async and commands can interleave
//!
//! The lock is never held across an await point; the submission path takes
//! its snapshot under the lock and releases it before calling the backend.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use ovenfresh_core::pricing::PricingBreakdown;
use ovenfresh_core::Cart;

/// Cart totals summary for API responses.
///
/// Combines the engine's counts with the priced-out breakdown so the cart
/// panel can render without a second round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub tax_cents: i64,
    pub delivery_fee_cents: i64,
    pub total_cents: i64,
}

impl CartTotals {
    /// Builds the summary from the cart and its pricing breakdown.
    pub fn new(cart: &Cart, pricing: &PricingBreakdown) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: pricing.subtotal_cents,
            discount_cents: pricing.discount_cents,
            tax_cents: pricing.tax_cents,
            delivery_fee_cents: pricing.delivery_fee_cents,
            total_cents: pricing.total_cents,
        }
    }
}

/// Shared cart state.
///
/// ## Why Not RwLock?
/// Cart operations are quick and most of them modify state. A RwLock would
/// add complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let subtotal = cart_state.with_cart(|cart| cart.subtotal());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&product, 1, custom))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovenfresh_core::types::{CustomizationOptions, DeliveryOption, OrderType};
    use ovenfresh_core::{compute_totals, Product};

    fn test_product(id: i64, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            category: "breads".to_string(),
            price_cents,
            is_vegan: true,
            is_gluten_free: false,
            allergens: vec![],
            rating: 4.0,
            is_active: true,
        }
    }

    #[test]
    fn test_shared_cart_state() {
        let state = CartState::new();
        let clone = state.clone();

        state.with_cart_mut(|cart| {
            cart.add_item(&test_product(1, 850), 2, CustomizationOptions::default())
        })
        .unwrap();

        // Clones share the same underlying cart.
        assert_eq!(clone.with_cart(|c| c.subtotal().cents()), 1700);
    }

    #[test]
    fn test_totals_summary() {
        let state = CartState::new();
        state
            .with_cart_mut(|cart| {
                cart.add_item(&test_product(1, 850), 2, CustomizationOptions::default())
            })
            .unwrap();

        let totals = state.with_cart(|cart| {
            let pricing = compute_totals(
                cart.subtotal(),
                None,
                OrderType::Pickup,
                DeliveryOption::Standard,
            );
            CartTotals::new(cart, &pricing)
        });

        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.subtotal_cents, 1700);
        assert_eq!(totals.tax_cents, 136); // 8% of $17.00
        assert_eq!(totals.total_cents, 1836);
    }
}
