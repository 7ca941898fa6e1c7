//! # Error Types
//!
//! Domain-specific error types for ovenfresh-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ovenfresh-core errors (this file)                                      │
//! │  ├── CoreError        - Cart, promo, and checkout rule violations       │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  ovenfresh-backend errors (separate crate)                              │
//! │  └── BackendError     - Catalog/submission collaborator failures        │
//! │                                                                         │
//! │  Storefront API errors (in app)                                         │
//! │  └── ApiError         - What the frontend sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend                │
//! │        BackendError ──────────────► ApiError → Frontend                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, code, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They are all detected
/// synchronously and block the attempted operation without changing state.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Placing an order with zero lines.
    ///
    /// ## When This Occurs
    /// - "Place order" pressed while the cart is empty
    ///
    /// The checkout flow stays in its current state; this never transitions.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Promo code not present in the promotion table.
    ///
    /// ## When This Occurs
    /// - Typo or expired code entered at checkout
    ///
    /// Any previously applied promo is left unchanged.
    #[error("Invalid promo code: {code}")]
    InvalidPromoCode { code: String },

    /// Quantity update with a value below 1.
    ///
    /// ## When This Occurs
    /// - The update path receives 0 or a negative quantity
    ///
    /// Lines are never stored with quantity 0; decrementing to zero must
    /// route through `remove_item` instead.
    #[error("Invalid quantity {requested}: use remove to delete a line")]
    InvalidQuantity { requested: i64 },

    /// Cart line lookup failed.
    #[error("Product {product_id} is not in the cart")]
    LineNotFound { product_id: i64 },

    /// Cart has exceeded maximum allowed distinct lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// The checkout state machine rejected a transition.
    ///
    /// ## When This Occurs
    /// - "Continue shopping" pressed while still browsing
    /// - Any action fired against a state that does not accept it
    #[error("Cannot {action} while {from}")]
    InvalidTransition { from: String, action: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid characters in a promo code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
