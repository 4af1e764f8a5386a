//! Inventory routes.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use stocktake_core::inventory::LowStockProduct;

use crate::AppState;
use crate::error::ApiError;

/// Creates the inventory routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/low-stock", get(low_stock))
}

/// Response for the low-stock listing.
#[derive(Debug, Serialize)]
pub struct LowStockResponse {
    /// Products below the low-stock threshold, in store order.
    pub products: Vec<LowStockProduct>,
}

/// GET /low-stock - List products running low, classified.
async fn low_stock(State(state): State<AppState>) -> Result<Json<LowStockResponse>, ApiError> {
    let products = state.inventory.low_stock().await?;
    Ok(Json(LowStockResponse { products }))
}
