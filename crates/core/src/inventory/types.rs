//! Inventory types and stock classification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stocktake_shared::RowId;

/// Rows with stock strictly below this are low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;
/// Rows with stock strictly below this are dead stock.
pub const DEAD_STOCK_THRESHOLD: i64 = 5;
/// Name reported for rows that have none.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown";

/// Derived stock status, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// Below [`DEAD_STOCK_THRESHOLD`].
    Dead,
    /// Between [`DEAD_STOCK_THRESHOLD`] and [`LOW_STOCK_THRESHOLD`].
    AtRisk,
    /// At or above [`LOW_STOCK_THRESHOLD`].
    Healthy,
}

impl StockStatus {
    /// Classify a stock level.
    #[must_use]
    pub const fn classify(stock_on_hand: i64) -> Self {
        if stock_on_hand < DEAD_STOCK_THRESHOLD {
            Self::Dead
        } else if stock_on_hand < LOW_STOCK_THRESHOLD {
            Self::AtRisk
        } else {
            Self::Healthy
        }
    }

    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dead => "dead",
            Self::AtRisk => "at-risk",
            Self::Healthy => "healthy",
        }
    }
}

/// Inventory row as returned by the store. Any column may be missing or null.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryRow {
    /// Row identifier.
    pub id: RowId,
    /// Product name.
    #[serde(default)]
    pub name: Option<String>,
    /// Units in stock.
    #[serde(default)]
    pub stock_on_hand: Option<i64>,
    /// Age of the stock.
    #[serde(default)]
    pub age: Option<i64>,
    /// Unit price.
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// Classified low-stock entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockProduct {
    /// Row identifier.
    pub id: RowId,
    /// Product name, or [`UNKNOWN_PRODUCT_NAME`].
    pub name: String,
    /// Units in stock.
    pub quantity: i64,
    /// Age of the stock.
    pub age: i64,
    /// Unit price.
    pub price: Decimal,
    /// Derived status.
    pub status: StockStatus,
}

impl From<InventoryRow> for LowStockProduct {
    fn from(row: InventoryRow) -> Self {
        let quantity = row.stock_on_hand.unwrap_or(0);
        Self {
            id: row.id,
            name: row.name.unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_string()),
            quantity,
            age: row.age.unwrap_or(0),
            price: row.price.unwrap_or(Decimal::ZERO),
            status: StockStatus::classify(quantity),
        }
    }
}
