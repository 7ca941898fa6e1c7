//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('place_order')                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐   │
//! │  │  Command Function                                                │   │
//! │  │  Result<T, ApiError>                                             │   │
//! │  │         │                                                        │   │
//! │  │         ▼                                                        │   │
//! │  │  Rule violation? ──── CoreError::EmptyCart ───────┐              │   │
//! │  │         │                                         ▼              │   │
//! │  │  Collaborator down? ─ BackendError::Unavailable ─ ApiError ────► │   │
//! │  │         │                                                        │   │
//! │  │  Success ──────────────────────────────────────────────────────► │   │
//! │  └──────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  catch (e) {                                                            │
//! │    // e.message = "Cannot place an order with an empty cart"            │
//! │    // e.code = "EMPTY_CART"                                             │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Commands return errors to the frontend as JSON. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;
use ovenfresh_backend::BackendError;
use ovenfresh_core::CoreError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "INVALID_PROMO",
///   "message": "Invalid promo code: BREADFAN"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await invoke('apply_promo_code', { code });
/// } catch (e) {
///   switch (e.code) {
///     case 'INVALID_PROMO':
///       showInlineError(e.message);
///       break;
///     case 'CART_FROZEN':
///       // submission in flight; disable controls
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Cart is read-only while an order is processing
    CartFrozen,

    /// Placing an order with an empty cart
    EmptyCart,

    /// Promo code rejected
    InvalidPromo,

    /// Checkout flow rejected the action
    CheckoutError,

    /// The order backend failed during processing
    SubmissionError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: i64) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates the frozen-cart error used while an order is in flight.
    pub fn cart_frozen() -> Self {
        ApiError::new(
            ErrorCode::CartFrozen,
            "Your order is being processed; the cart cannot be changed right now",
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        let code = match err {
            CoreError::ProductNotFound(_) => ErrorCode::NotFound,
            CoreError::EmptyCart => ErrorCode::EmptyCart,
            CoreError::InvalidPromoCode { .. } => ErrorCode::InvalidPromo,
            CoreError::InvalidQuantity { .. } => ErrorCode::ValidationError,
            CoreError::LineNotFound { .. } => ErrorCode::CartError,
            CoreError::CartTooLarge { .. } => ErrorCode::CartError,
            CoreError::QuantityTooLarge { .. } => ErrorCode::ValidationError,
            CoreError::InvalidTransition { .. } => ErrorCode::CheckoutError,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, message)
    }
}

/// Converts backend errors to API errors.
impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::ProductNotFound { id } => ApiError::not_found("Product", id),
            BackendError::Rejected { .. } | BackendError::Unavailable(_) | BackendError::Timeout => {
                // Log the detail, return a retryable message to the customer.
                tracing::error!("order submission failed: {}", err);
                ApiError::new(
                    ErrorCode::SubmissionError,
                    "We couldn't place your order. Your cart is untouched - please try again",
                )
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
