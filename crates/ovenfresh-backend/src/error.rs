//! # Boundary Error Types
//!
//! Error types for the catalog and order-submission collaborators.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Collaborator failure (network, rejection, timeout)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BackendError (this module) ← Adds context and categorization           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in storefront app) ← Serialized for frontend                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Checkout flow returns to ReviewingCart with the cart intact            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Failures from the external collaborators.
///
/// A submission failure is the ONLY asynchronous error in the system; the
/// checkout flow models it as a first-class outcome distinct from success,
/// never as a silent completion.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend refused the order.
    ///
    /// ## When This Occurs
    /// - Item no longer available at fulfillment time
    /// - Delivery window closed while the customer was checking out
    #[error("Order rejected: {reason}")]
    Rejected { reason: String },

    /// The backend could not be reached.
    ///
    /// ## When This Occurs
    /// - Network failure
    /// - Service outage (the storefront keeps the cart and lets the
    ///   customer retry manually; there is no automatic retry)
    #[error("Order service unavailable: {0}")]
    Unavailable(String),

    /// The submission timed out in flight.
    #[error("Order submission timed out")]
    Timeout,

    /// Catalog entry missing.
    #[error("Product not found: {id}")]
    ProductNotFound { id: i64 },
}

/// Convenience type alias for Results with BackendError.
pub type BackendResult<T> = Result<T, BackendError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BackendError::Rejected {
            reason: "sourdough sold out".to_string(),
        };
        assert_eq!(err.to_string(), "Order rejected: sourdough sold out");

        let err = BackendError::Timeout;
        assert_eq!(err.to_string(), "Order submission timed out");

        let err = BackendError::ProductNotFound { id: 42 };
        assert_eq!(err.to_string(), "Product not found: 42");
    }
}
