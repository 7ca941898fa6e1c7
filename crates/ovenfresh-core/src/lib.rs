//! # ovenfresh-core: Pure Business Logic for the Ovenfresh Storefront
//!
//! This crate is the **heart** of the Ovenfresh order engine. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Ovenfresh Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                  Storefront Frontend (TypeScript)               │    │
//! │  │    Menu UI ──► Customize UI ──► Cart UI ──► Checkout UI         │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                  apps/storefront (commands)                     │    │
//! │  │    add_to_cart, apply_promo_code, place_order, ...              │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ ovenfresh-core (THIS CRATE) ★                   │    │
//! │  │                                                                 │    │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │    │
//! │  │   │  types  │ │  money  │ │  cart   │ │ pricing │ │checkout │  │    │
//! │  │   │ Product │ │  Money  │ │  Cart   │ │ totals  │ │  state  │  │    │
//! │  │   │ Context │ │ TaxCalc │ │CartLine │ │ + promo │ │ machine │  │    │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │            ovenfresh-backend (Boundary Layer)                   │    │
//! │  │       CatalogProvider, OrderBackend, mock collaborators         │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CustomizationOptions, OrderContext...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart engine: lines, merge policy, subtotal
//! - [`promo`] - Promotion table and code validation
//! - [`pricing`] - Pure pricing calculator
//! - [`checkout`] - Checkout state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and timers are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use ovenfresh_core::money::Money;
//! use ovenfresh_core::pricing::compute_totals;
//! use ovenfresh_core::promo::validate_code;
//! use ovenfresh_core::types::{DeliveryOption, OrderType};
//!
//! let promo = validate_code("WELCOME10").unwrap();
//! let totals = compute_totals(
//!     Money::from_cents(10000),
//!     Some(&promo),
//!     OrderType::Pickup,
//!     DeliveryOption::Standard,
//! );
//! assert_eq!(totals.total_cents, 9720); // $97.20
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod pricing;
pub mod promo;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use ovenfresh_core::Money` instead of
// `use ovenfresh_core::money::Money`

pub use cart::{merge_key, Cart, CartLine};
pub use checkout::CheckoutState;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{compute_totals, PricingBreakdown};
pub use promo::{validate_code, AppliedPromo};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat sales tax applied to every order: 8% (800 basis points).
///
/// ## Why a constant?
/// The storefront charges one jurisdiction's rate. Making it per-product or
/// per-region is a config concern for a later version; the pricing pipeline
/// already takes the rate through [`money::Money::calculate_tax`].
pub const SALES_TAX: TaxRate = TaxRate::from_bps(800);

/// Maximum distinct lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps review screens scannable.
pub const MAX_CART_LINES: usize = 50;

/// Maximum quantity of a single line in the cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 50 instead of 5).
/// Wholesale orders go through a different channel.
pub const MAX_LINE_QUANTITY: i64 = 99;
