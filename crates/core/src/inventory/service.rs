//! Low-stock inventory reader.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use stocktake_shared::AppError;

use super::types::{InventoryRow, LOW_STOCK_THRESHOLD, LowStockProduct};
use crate::store::StoreError;

/// Table holding inventory rows.
pub const INVENTORY_TABLE: &str = "inventory";

/// Inventory read errors.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The store query failed.
    #[error("failed to read inventory: {0}")]
    Store(#[from] StoreError),
}

impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        Self::Database(err.to_string())
    }
}

/// Repository trait for inventory reads.
pub trait InventoryStore: Send + Sync {
    /// List rows whose `stock_on_hand` is strictly below `threshold`, in the
    /// store's natural order.
    fn list_below(
        &self,
        threshold: i64,
    ) -> impl std::future::Future<Output = Result<Vec<InventoryRow>, StoreError>> + Send;
}

/// Reads and classifies low-stock inventory.
pub struct InventoryService<S: InventoryStore> {
    store: Arc<S>,
}

impl<S: InventoryStore> InventoryService<S> {
    /// Create a new inventory service.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List products below [`LOW_STOCK_THRESHOLD`], each classified.
    ///
    /// Rows are not re-filtered here: a row the store returns at or above the
    /// threshold is reported as healthy.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub async fn low_stock(&self) -> Result<Vec<LowStockProduct>, InventoryError> {
        let rows = self.store.list_below(LOW_STOCK_THRESHOLD).await?;
        debug!(rows = rows.len(), "Fetched low-stock inventory");
        Ok(rows.into_iter().map(LowStockProduct::from).collect())
    }
}
