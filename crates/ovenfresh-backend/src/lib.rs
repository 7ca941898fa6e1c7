//! # ovenfresh-backend: Boundary Layer for the Ovenfresh Storefront
//!
//! This crate owns the contracts with the external collaborators and ships
//! the in-memory implementations the storefront runs on.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Ovenfresh Data Flow                                │
//! │                                                                         │
//! │  Storefront command (add_to_cart, place_order)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                 ovenfresh-backend (THIS CRATE)                  │    │
//! │  │                                                                 │    │
//! │  │   ┌────────────────┐   ┌────────────────┐   ┌──────────────┐   │    │
//! │  │   │CatalogProvider │   │  OrderBackend  │   │ BackendError │   │    │
//! │  │   │  (catalog.rs)  │   │   (order.rs)   │   │  (error.rs)  │   │    │
//! │  │   │                │   │                │   │              │   │    │
//! │  │   │ StaticCatalog  │   │MockOrderBackend│   │ Rejected     │   │    │
//! │  │   │ (seeded menu)  │   │(latency+faults)│   │ Unavailable  │   │    │
//! │  │   └────────────────┘   └────────────────┘   └──────────────┘   │    │
//! │  │                                                                 │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  External services (real catalog, real order API) slot in behind        │
//! │  the same traits — no engine changes required.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Product supply contract + seeded in-memory menu
//! - [`order`] - Order submission contract + mock with simulated settlement
//! - [`error`] - Boundary error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ovenfresh_backend::{CatalogProvider, StaticCatalog};
//!
//! let catalog = StaticCatalog::bakery_menu();
//! let products = catalog.list_products().await?;
//! let order = backend.submit_order(&draft).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod order;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{CatalogProvider, StaticCatalog};
pub use error::{BackendError, BackendResult};
pub use order::{MockOrderBackend, OrderBackend, OrderDraft, OrderReceipt};
