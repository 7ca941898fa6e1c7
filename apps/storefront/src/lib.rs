//! # Ovenfresh Storefront Library
//!
//! Headless session engine for the Ovenfresh storefront: wires the catalog
//! and order backend collaborators, owns the session state, and exposes the
//! command layer the frontend invokes.
//!
//! ## Module Organization
//! ```text
//! ovenfresh_storefront/
//! ├── lib.rs          ◄─── You are here (wiring & demo run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state wrapper + totals summary
//! │   ├── session.rs  ◄─── Checkout/promo/context state
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports + pricing helper
//! │   ├── catalog.rs  ◄─── Product queries
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── promo.rs    ◄─── Promo code commands
//! │   └── checkout.rs ◄─── Checkout flow + order submission
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • Defaults + OVENFRESH_* environment overrides                      │
//! │                                                                         │
//! │  3. Wire Collaborators ───────────────────────────────────────────────► │
//! │     • StaticCatalog: seeded bakery menu                                 │
//! │     • MockOrderBackend: simulated settlement latency                    │
//! │                                                                         │
//! │  4. Initialize State Objects ─────────────────────────────────────────► │
//! │     • CartState: empty cart behind a mutex                              │
//! │     • SessionState: browsing, no promo, pickup defaults                 │
//! │                                                                         │
//! │  5. Run ──────────────────────────────────────────────────────────────► │
//! │     • Demo binary: scripted walkthrough of a full order                 │
//! │     • Real deployment: commands invoked over the frontend bridge        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use ovenfresh_backend::{MockOrderBackend, StaticCatalog};
use ovenfresh_core::types::{CustomizationOptions, GiftDetails, GiftPackaging, Size};
use state::{CartState, ConfigState, SessionState};

/// Runs a scripted walkthrough of the full ordering flow against the mock
/// collaborators. This is what the `storefront` binary executes; it doubles
/// as an end-to-end smoke test of the wiring.
pub async fn run() -> Result<(), ApiError> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(store = %config.store_name, "starting storefront session");

    // Wire collaborators and state. The mock settles after a short delay,
    // standing in for the real order service.
    let catalog = StaticCatalog::bakery_menu();
    let backend = MockOrderBackend::new().with_latency(Duration::from_millis(800));
    let cart = CartState::new();
    let session = SessionState::new();

    // Browse the menu.
    let products = commands::catalog::list_products(&catalog).await?;
    info!(products = products.len(), "menu loaded");

    // Quick-add two sourdough boules.
    let response = commands::cart::add_to_cart(
        &catalog,
        &cart,
        &session,
        1,
        Some(2),
        CustomizationOptions::default(),
    )
    .await?;
    info!(
        subtotal = %config.format_currency(response.totals.subtotal_cents),
        "added Sourdough Boule x2"
    );

    // Customize a carrot cake as a gift.
    commands::checkout::begin_customizing(&catalog, &session, 8).await?;
    let response = commands::checkout::confirm_customization(
        &catalog,
        &cart,
        &session,
        Some(1),
        CustomizationOptions {
            size: Size::Large,
            special_instructions: "Write 'Happy 40th' on top".to_string(),
            gift: Some(GiftDetails {
                message: "From all of us at the office".to_string(),
                packaging: GiftPackaging::Premium,
            }),
        },
    )
    .await?;
    info!(
        subtotal = %config.format_currency(response.totals.subtotal_cents),
        "added Classic Carrot Cake (gift wrapped)"
    );

    // Apply a promo and review.
    let promo = commands::promo::apply_promo_code(&session, "WELCOME10")?;
    info!(code = %promo.code, description = %promo.description, "promo applied");

    commands::checkout::open_review(&session)?;
    let review = commands::cart::get_cart(&cart, &session);
    info!(
        subtotal = %config.format_currency(review.totals.subtotal_cents),
        discount = %config.format_currency(review.totals.discount_cents),
        tax = %config.format_currency(review.totals.tax_cents),
        total = %config.format_currency(review.totals.total_cents),
        "reviewing order"
    );

    // Place the order and wait for settlement.
    let confirmation = commands::checkout::place_order(&backend, &cart, &session).await?;
    println!(
        "Order {} confirmed - total {}",
        confirmation.order_number,
        config.format_currency(confirmation.pricing.total_cents)
    );

    commands::checkout::continue_shopping(&cart, &session)?;
    info!("session reset; ready for the next order");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=ovenfresh=trace` - Show trace for ovenfresh crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ovenfresh=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
