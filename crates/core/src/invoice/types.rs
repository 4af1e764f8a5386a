//! Invoice types and data structures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use stocktake_shared::RowId;

/// File URL recorded for invoices entered by hand.
pub const MANUAL_ENTRY_FILE_URL: &str = "manual-entry";
/// Category given to items that do not name one.
pub const DEFAULT_CATEGORY: &str = "other";
/// Supplier given to items that do not name one.
pub const DEFAULT_ITEM_SUPPLIER: &str = "Unknown Supplier";

/// Input for creating an invoice with its line items.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    /// Location of the scanned invoice, if any.
    pub file_url: Option<String>,
    /// Supplier named on the invoice.
    pub supplier: String,
    /// Line items; must not be empty.
    pub items: Vec<NewInvoiceItem>,
}

/// Invoice row as sent to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewInvoiceRecord {
    /// Location of the scanned invoice, or [`MANUAL_ENTRY_FILE_URL`].
    pub file_url: String,
    /// Supplier named on the invoice.
    pub supplier: String,
}

impl NewInvoiceRecord {
    /// Builds the row for an invoice, substituting the manual-entry sentinel
    /// when no file URL was given.
    #[must_use]
    pub fn from_input(input: &NewInvoice) -> Self {
        let file_url = input
            .file_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(MANUAL_ENTRY_FILE_URL);

        Self {
            file_url: file_url.to_string(),
            supplier: input.supplier.trim().to_string(),
        }
    }
}

/// Line item as sent to the store.
///
/// `invoice_id` stays `None` until the parent invoice has been inserted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInvoiceItem {
    /// Parent invoice, assigned after the invoice insert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<RowId>,
    /// Product name.
    pub name: String,
    /// Product category.
    pub category: String,
    /// Units received.
    pub quantity: i64,
    /// Unit cost.
    #[serde(rename = "buyingPrice")]
    pub buying_price: Decimal,
    /// Unit sale price.
    #[serde(rename = "sellingPrice")]
    pub selling_price: Decimal,
    /// Storage location.
    pub location: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Supplier of this item.
    pub supplier: String,
}

impl NewInvoiceItem {
    /// Creates an item with the default category, buying price and supplier.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: i64, selling_price: Decimal) -> Self {
        Self {
            invoice_id: None,
            name: name.into(),
            category: DEFAULT_CATEGORY.to_string(),
            quantity,
            buying_price: Decimal::ZERO,
            selling_price,
            location: None,
            description: None,
            supplier: DEFAULT_ITEM_SUPPLIER.to_string(),
        }
    }
}

/// Invoice row as echoed by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Store-generated identifier.
    pub id: RowId,
    /// Location of the scanned invoice.
    #[serde(default)]
    pub file_url: Option<String>,
    /// Supplier named on the invoice.
    pub supplier: String,
    /// Server-generated columns (timestamps and the like).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Line item row as echoed by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Parent invoice.
    pub invoice_id: RowId,
    /// Product name.
    pub name: String,
    /// Product category.
    pub category: String,
    /// Units received.
    pub quantity: i64,
    /// Unit cost.
    #[serde(rename = "buyingPrice")]
    pub buying_price: Decimal,
    /// Unit sale price.
    #[serde(rename = "sellingPrice")]
    pub selling_price: Decimal,
    /// Storage location.
    #[serde(default)]
    pub location: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Supplier of this item.
    pub supplier: String,
    /// Server-generated columns, including the item's own id.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of a successful invoice creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedInvoice {
    /// The persisted invoice.
    pub invoice: Invoice,
    /// The persisted items, each carrying the invoice id.
    pub items: Vec<InvoiceItem>,
}
