//! # Catalog Commands
//!
//! Read-only product queries backing the menu screen.

use tracing::debug;

use crate::error::ApiError;
use ovenfresh_backend::CatalogProvider;
use ovenfresh_core::Product;

/// Lists the products customers can currently order.
///
/// Inactive products are filtered out here so the menu never shows
/// something the cart would then reject.
pub async fn list_products(catalog: &dyn CatalogProvider) -> Result<Vec<Product>, ApiError> {
    debug!("list_products command");

    let products = catalog.list_products().await?;
    Ok(products.into_iter().filter(|p| p.is_active).collect())
}

/// Fetches a single product for the customization screen.
pub async fn get_product(
    catalog: &dyn CatalogProvider,
    product_id: i64,
) -> Result<Product, ApiError> {
    debug!(product_id, "get_product command");

    catalog
        .get_by_id(product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", product_id))
}
