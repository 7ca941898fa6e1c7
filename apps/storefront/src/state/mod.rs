//! # State Module
//!
//! Manages session state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can build/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                        │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartState   │  │ SessionState │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  checkout    │  │  store_name      │              │
//! │  │    Cart      │  │  promo       │  │  currency        │              │
//! │  │  >>          │  │  context     │  │  theme           │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                         │
//! │  • CartState/SessionState: Arc<Mutex<T>>, locks never held across       │
//! │    await points                                                         │
//! │  • ConfigState: read-only after initialization                          │
//! │                                                                         │
//! │  Both mutable states are explicitly constructed and injected into       │
//! │  commands - there are no ambient globals.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod session;

pub use cart::{CartState, CartTotals};
pub use config::{ConfigState, Theme};
pub use session::{Session, SessionState};
