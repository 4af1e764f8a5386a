//! Low-stock inventory reporting.

mod service;
mod types;

pub use service::{INVENTORY_TABLE, InventoryError, InventoryService, InventoryStore};
pub use types::{
    DEAD_STOCK_THRESHOLD, InventoryRow, LOW_STOCK_THRESHOLD, LowStockProduct, StockStatus,
    UNKNOWN_PRODUCT_NAME,
};
