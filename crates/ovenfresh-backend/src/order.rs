//! # Order Backend
//!
//! The submission collaborator: takes the frozen order snapshot and settles
//! it, successfully or not.
//!
//! ## Submission Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Submission Flow                                      │
//! │                                                                         │
//! │  place_order (app layer)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderDraft = cart lines + pricing + context                            │
//! │  frozen at the moment Processing is entered                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  submit_order(&draft)  ← called AT MOST ONCE per Processing entry       │
//! │       │                                                                 │
//! │       ├── Ok(OrderReceipt)   → Complete(order_number), cart cleared     │
//! │       │                                                                 │
//! │       └── Err(BackendError)  → back to ReviewingCart, cart intact       │
//! │                                                                         │
//! │  The engine never retries automatically and never recomputes the        │
//! │  snapshot mid-flight.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The mock implementation keeps the reference behavior (settle after a
//! fixed delay) but pushes the delay and the always-succeeds assumption into
//! the test double: latency is configurable and failures are scriptable, so
//! production call sites depend only on the abstract result.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{BackendError, BackendResult};
use ovenfresh_core::{CartLine, OrderContext, PricingBreakdown};

// =============================================================================
// Order Snapshot Types
// =============================================================================

/// The immutable submission payload, captured when Processing is entered.
///
/// Uses the snapshot pattern: whatever the backend charges is exactly what
/// the customer reviewed, even if (hypothetically) the cart could change
/// underneath the in-flight call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// Cart lines at submission time (frozen prices, customizations).
    pub lines: Vec<CartLine>,

    /// Priced-out totals at submission time.
    pub pricing: PricingBreakdown,

    /// Fulfillment details.
    pub context: OrderContext,

    /// When the customer pressed "place order".
    pub placed_at: DateTime<Utc>,
}

/// What the backend returns on settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    /// Backend-assigned order id (UUID v4).
    pub order_id: String,

    /// Human-readable order number, unique within the session.
    pub order_number: String,
}

// =============================================================================
// Backend Contract
// =============================================================================

/// The order-submission collaborator.
///
/// ## Contract
/// - Called at most once per Processing entry; the engine does not retry
/// - Must be idempotent-safe under that discipline
/// - Failure is a first-class outcome, never swallowed
#[async_trait]
pub trait OrderBackend: Send + Sync {
    /// Submits the frozen order snapshot and waits for settlement.
    async fn submit_order(&self, draft: &OrderDraft) -> BackendResult<OrderReceipt>;
}

// =============================================================================
// Mock Backend
// =============================================================================

/// In-memory stand-in for the real order service.
///
/// ## Behavior
/// - Sleeps for the configured latency (simulated settlement)
/// - Consumes one scripted failure if any is queued, otherwise succeeds
///   with a fresh receipt
///
/// ## Order Numbers
/// Date prefix plus a per-session monotonic counter, e.g. `OF-260807-0003`.
/// The counter guarantees in-session uniqueness.
pub struct MockOrderBackend {
    latency: Duration,
    sequence: AtomicU64,
    scripted_failures: Mutex<VecDeque<BackendError>>,
}

impl MockOrderBackend {
    /// Creates a mock that settles immediately.
    pub fn new() -> Self {
        MockOrderBackend {
            latency: Duration::ZERO,
            sequence: AtomicU64::new(0),
            scripted_failures: Mutex::new(VecDeque::new()),
        }
    }

    /// Sets the simulated settlement latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Queues a failure for the next submission. Each queued failure is
    /// consumed exactly once, in order; once the queue drains the mock goes
    /// back to succeeding.
    pub fn fail_next(&self, error: BackendError) {
        self.scripted_failures
            .lock()
            .expect("failure queue mutex poisoned")
            .push_back(error);
    }

    fn next_order_number(&self) -> String {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("OF-{}-{:04}", Utc::now().format("%y%m%d"), seq)
    }
}

impl Default for MockOrderBackend {
    fn default() -> Self {
        MockOrderBackend::new()
    }
}

#[async_trait]
impl OrderBackend for MockOrderBackend {
    async fn submit_order(&self, draft: &OrderDraft) -> BackendResult<OrderReceipt> {
        debug!(
            lines = draft.lines.len(),
            total_cents = draft.pricing.total_cents,
            "submit_order"
        );

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let scripted = self
            .scripted_failures
            .lock()
            .expect("failure queue mutex poisoned")
            .pop_front();

        if let Some(error) = scripted {
            info!(error = %error, "submission failed (scripted)");
            return Err(error);
        }

        let receipt = OrderReceipt {
            order_id: Uuid::new_v4().to_string(),
            order_number: self.next_order_number(),
        };

        info!(
            order_id = %receipt.order_id,
            order_number = %receipt.order_number,
            total_cents = draft.pricing.total_cents,
            "order settled"
        );

        Ok(receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use ovenfresh_core::types::DeliveryOption;
    use ovenfresh_core::{compute_totals, Money, OrderType};

    fn draft() -> OrderDraft {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        OrderDraft {
            lines: Vec::new(),
            pricing: compute_totals(
                Money::from_cents(1000),
                None,
                OrderType::Pickup,
                DeliveryOption::Standard,
            ),
            context: OrderContext::pickup(date, time),
            placed_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_submit_succeeds_with_receipt() {
        let backend = MockOrderBackend::new();
        let receipt = backend.submit_order(&draft()).await.unwrap();

        assert!(receipt.order_number.starts_with("OF-"));
        assert!(Uuid::parse_str(&receipt.order_id).is_ok());
    }

    #[tokio::test]
    async fn test_order_numbers_are_unique_and_monotonic() {
        let backend = MockOrderBackend::new();

        let a = backend.submit_order(&draft()).await.unwrap();
        let b = backend.submit_order(&draft()).await.unwrap();

        assert_ne!(a.order_number, b.order_number);
        assert!(a.order_number < b.order_number);
    }

    #[tokio::test]
    async fn test_scripted_failure_is_consumed_once() {
        let backend = MockOrderBackend::new();
        backend.fail_next(BackendError::Unavailable("outage".to_string()));

        let err = backend.submit_order(&draft()).await.unwrap_err();
        assert!(matches!(err, BackendError::Unavailable(_)));

        // Queue drained: next submission succeeds.
        assert!(backend.submit_order(&draft()).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_awaited() {
        let backend = MockOrderBackend::new().with_latency(Duration::from_millis(1500));

        // Paused clock: the sleep advances virtual time, so elapsed time
        // proves the delay was actually awaited.
        let start = tokio::time::Instant::now();
        backend.submit_order(&draft()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }
}
