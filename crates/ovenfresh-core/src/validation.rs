//! # Validation Module
//!
//! Input validation utilities for the Ovenfresh order engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                         │
//! │  ├── Basic format checks (empty, length)                                │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command layer (Rust)                                          │
//! │  ├── Type validation (deserialization)                                  │
//! │  └── THIS MODULE: business rule validation                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Order backend (external collaborator)                         │
//! │  └── Server-side validation (out of scope here)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ovenfresh_core::validation::{validate_quantity, validate_promo_code};
//!
//! validate_quantity(3).unwrap();
//! validate_promo_code("WELCOME10").unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::OrderContext;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted special-instructions note.
const MAX_INSTRUCTIONS_LEN: usize = 500;

/// Longest accepted gift-card message.
const MAX_GIFT_MESSAGE_LEN: usize = 200;

/// Longest accepted promo code entry.
const MAX_PROMO_CODE_LEN: usize = 30;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (99)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart: Add Item                                                         │
/// │                                                                         │
/// │  User picks quantity: 3                                                 │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(3) ← THIS FUNCTION                                   │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"                │
/// │       │                                                                 │
/// │       ├── qty > 99? → Error: "quantity must be between 1 and 99"        │
/// │       │                                                                 │
/// │       └── OK → Proceed with add_item                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional freebies)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates free-form special instructions.
///
/// ## Rules
/// - May be empty
/// - Maximum 500 characters
pub fn validate_special_instructions(text: &str) -> ValidationResult<()> {
    if text.len() > MAX_INSTRUCTIONS_LEN {
        return Err(ValidationError::TooLong {
            field: "special instructions".to_string(),
            max: MAX_INSTRUCTIONS_LEN,
        });
    }

    Ok(())
}

/// Validates a gift-card message.
///
/// ## Rules
/// - Must not be empty (a gift without a message is a packaging choice,
///   not a gift)
/// - Maximum 200 characters
pub fn validate_gift_message(message: &str) -> ValidationResult<()> {
    let message = message.trim();

    if message.is_empty() {
        return Err(ValidationError::Required {
            field: "gift message".to_string(),
        });
    }

    if message.len() > MAX_GIFT_MESSAGE_LEN {
        return Err(ValidationError::TooLong {
            field: "gift message".to_string(),
            max: MAX_GIFT_MESSAGE_LEN,
        });
    }

    Ok(())
}

/// Validates the shape of a promo code entry before table lookup.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Maximum 30 characters
/// - Letters and digits only
///
/// ## Returns
/// The trimmed, upper-cased code ready for exact-match lookup.
pub fn validate_promo_code(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "promo code".to_string(),
        });
    }

    if code.len() > MAX_PROMO_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "promo code".to_string(),
            max: MAX_PROMO_CODE_LEN,
        });
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "promo code".to_string(),
            reason: "must contain only letters and numbers".to_string(),
        });
    }

    Ok(code.to_ascii_uppercase())
}

// =============================================================================
// Context Validators
// =============================================================================

/// Validates a fulfillment context before checkout.
///
/// ## Rules
/// - Delivery orders require a non-empty address
/// - Pickup orders ignore the address entirely
pub fn validate_order_context(context: &OrderContext) -> ValidationResult<()> {
    if context.requires_address() {
        let address = context
            .delivery_address
            .as_deref()
            .map(str::trim)
            .unwrap_or("");

        if address.is_empty() {
            return Err(ValidationError::Required {
                field: "delivery address".to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates cart size (number of distinct lines).
///
/// ## Rules
/// - Must not exceed MAX_CART_LINES (50)
pub fn validate_cart_size(current_lines: usize) -> ValidationResult<()> {
    if current_lines >= MAX_CART_LINES {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_LINES as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeliveryOption, OrderContext};
    use chrono::{NaiveDate, NaiveTime};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn time() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(42).is_ok());
        assert!(validate_quantity(99).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(100).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(425).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_special_instructions() {
        assert!(validate_special_instructions("").is_ok());
        assert!(validate_special_instructions("no sesame please").is_ok());
        assert!(validate_special_instructions(&"x".repeat(501)).is_err());
    }

    #[test]
    fn test_validate_gift_message() {
        assert!(validate_gift_message("Happy birthday!").is_ok());
        assert!(validate_gift_message("").is_err());
        assert!(validate_gift_message("   ").is_err());
        assert!(validate_gift_message(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_promo_code_normalizes() {
        assert_eq!(validate_promo_code(" welcome10 ").unwrap(), "WELCOME10");
        assert_eq!(validate_promo_code("FREESHIP").unwrap(), "FREESHIP");

        assert!(validate_promo_code("").is_err());
        assert!(validate_promo_code("HAS SPACE").is_err());
        assert!(validate_promo_code(&"A".repeat(31)).is_err());
    }

    #[test]
    fn test_validate_order_context() {
        let pickup = OrderContext::pickup(date(), time());
        assert!(validate_order_context(&pickup).is_ok());

        let delivery =
            OrderContext::delivery(DeliveryOption::Standard, date(), time(), "12 Rye Lane");
        assert!(validate_order_context(&delivery).is_ok());

        let mut missing = delivery.clone();
        missing.delivery_address = None;
        assert!(validate_order_context(&missing).is_err());

        let mut blank = delivery;
        blank.delivery_address = Some("   ".to_string());
        assert!(validate_order_context(&blank).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(49).is_ok());
        assert!(validate_cart_size(50).is_err());
    }
}
