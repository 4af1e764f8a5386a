//! Inventory repository for store reads.

use stocktake_core::inventory::{INVENTORY_TABLE, InventoryRow, InventoryStore};
use stocktake_core::store::StoreError;

use crate::client::{Filter, StoreClient};

/// Columns the low-stock listing reads.
const LOW_STOCK_COLUMNS: &str = "id,name,stock_on_hand,age,price";

/// Inventory repository implementation.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    client: StoreClient,
}

impl InventoryRepository {
    /// Create a new inventory repository.
    #[must_use]
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

impl InventoryStore for InventoryRepository {
    async fn list_below(&self, threshold: i64) -> Result<Vec<InventoryRow>, StoreError> {
        self.client
            .select(
                INVENTORY_TABLE,
                LOW_STOCK_COLUMNS,
                &[Filter::lt("stock_on_hand", threshold)],
            )
            .await
    }
}
