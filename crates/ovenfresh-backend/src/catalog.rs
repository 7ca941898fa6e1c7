//! # Catalog Provider
//!
//! Read-only product supply for the storefront.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Flow                                         │
//! │                                                                         │
//! │  Menu screen ──► list_products() ──► Vec<Product>  (read-only)          │
//! │                                                                         │
//! │  Add to cart ──► get_by_id(id) ──► Option<Product>                      │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │            Cart freezes the price it sees here;                         │
//! │            later catalog changes never reach existing lines.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shipped implementation is an in-memory menu. A fetched catalog slots
//! in behind the same trait without touching the engine.

use async_trait::async_trait;
use tracing::debug;

use crate::error::BackendResult;
use ovenfresh_core::Product;

// =============================================================================
// Provider Contract
// =============================================================================

/// Supplies the purchasable products. The core treats the catalog as
/// read-only input.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Returns every product on the menu, inactive ones included (the
    /// command layer filters what customers can actually add).
    async fn list_products(&self) -> BackendResult<Vec<Product>>;

    /// Looks up a single product by id.
    async fn get_by_id(&self, id: i64) -> BackendResult<Option<Product>>;
}

// =============================================================================
// Static Catalog
// =============================================================================

/// In-memory catalog seeded with the bakery menu.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Creates a catalog over an explicit product list (tests, previews).
    pub fn new(products: Vec<Product>) -> Self {
        StaticCatalog { products }
    }

    /// Creates the standard storefront menu.
    pub fn bakery_menu() -> Self {
        StaticCatalog::new(seed_products())
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        StaticCatalog::bakery_menu()
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn list_products(&self) -> BackendResult<Vec<Product>> {
        debug!(count = self.products.len(), "list_products");
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, id: i64) -> BackendResult<Option<Product>> {
        debug!(product_id = id, "get_by_id");
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }
}

// =============================================================================
// Seed Data
// =============================================================================

/// Seed row: (id, name, category, price_cents, vegan, gluten_free,
/// allergens, rating).
type SeedRow = (
    i64,
    &'static str,
    &'static str,
    i64,
    bool,
    bool,
    &'static [&'static str],
    f32,
);

/// The bakery menu across categories: breads, pastries, cakes, cookies,
/// and drinks. Prices in cents.
const MENU: &[SeedRow] = &[
    (1, "Sourdough Boule", "breads", 850, true, false, &["wheat"], 4.8),
    (2, "Seeded Rye Loaf", "breads", 725, true, false, &["wheat", "sesame"], 4.6),
    (3, "Gluten-Free Oat Loaf", "breads", 950, true, true, &["oats"], 4.2),
    (4, "Butter Croissant", "pastries", 425, false, false, &["wheat", "dairy", "eggs"], 4.9),
    (5, "Almond Croissant", "pastries", 525, false, false, &["wheat", "dairy", "eggs", "tree nuts"], 4.7),
    (6, "Morning Bun", "pastries", 475, false, false, &["wheat", "dairy"], 4.4),
    (7, "Vegan Cinnamon Roll", "pastries", 495, true, false, &["wheat", "soy"], 4.3),
    (8, "Classic Carrot Cake", "cakes", 3200, false, false, &["wheat", "dairy", "eggs", "tree nuts"], 4.8),
    (9, "Flourless Chocolate Torte", "cakes", 2800, false, true, &["dairy", "eggs"], 4.6),
    (10, "Lemon Drizzle Loaf", "cakes", 1800, false, false, &["wheat", "dairy", "eggs"], 4.1),
    (11, "Chocolate Chip Cookie", "cookies", 295, false, false, &["wheat", "dairy", "eggs"], 4.5),
    (12, "Ginger Molasses Cookie", "cookies", 295, true, false, &["wheat"], 4.2),
    (13, "Cold Brew Coffee", "drinks", 450, true, true, &[], 4.0),
    (14, "House Hot Chocolate", "drinks", 395, false, true, &["dairy"], 4.4),
];

fn seed_products() -> Vec<Product> {
    MENU.iter()
        .map(
            |&(id, name, category, price_cents, is_vegan, is_gluten_free, allergens, rating)| {
                Product {
                    id,
                    name: name.to_string(),
                    category: category.to_string(),
                    price_cents,
                    is_vegan,
                    is_gluten_free,
                    allergens: allergens.iter().map(|a| a.to_string()).collect(),
                    rating,
                    is_active: true,
                }
            },
        )
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
