//! Invoice routes.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stocktake_core::invoice::{
    DEFAULT_CATEGORY, DEFAULT_ITEM_SUPPLIER, Invoice, InvoiceItem, NewInvoice, NewInvoiceItem,
};
use stocktake_shared::RowId;

use crate::AppState;
use crate::error::ApiError;
use crate::extract;

/// Creates the invoice routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/invoices", post(create_invoice))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating an invoice.
#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    /// Location of the scanned invoice; omitted for manual entry.
    #[serde(default)]
    pub file_url: Option<String>,
    /// Supplier named on the invoice; a missing one fails validation.
    #[serde(default)]
    pub supplier: String,
    /// Line items.
    #[serde(default)]
    pub items: Vec<InvoiceItemRequest>,
}

/// A single line item of a create-invoice request.
#[derive(Debug, Deserialize)]
pub struct InvoiceItemRequest {
    /// Product name.
    pub name: String,
    /// Product category; defaults to "other".
    #[serde(default)]
    pub category: Option<String>,
    /// Units received.
    pub quantity: i64,
    /// Unit cost; defaults to 0.
    #[serde(default, rename = "buyingPrice")]
    pub buying_price: Option<Decimal>,
    /// Unit sale price.
    #[serde(rename = "sellingPrice")]
    pub selling_price: Decimal,
    /// Storage location.
    #[serde(default)]
    pub location: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Supplier of this item; defaults to "Unknown Supplier".
    #[serde(default)]
    pub supplier: Option<String>,
}

impl From<InvoiceItemRequest> for NewInvoiceItem {
    fn from(item: InvoiceItemRequest) -> Self {
        Self {
            invoice_id: None,
            name: item.name,
            category: item.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            quantity: item.quantity,
            buying_price: item.buying_price.unwrap_or(Decimal::ZERO),
            selling_price: item.selling_price,
            location: item.location,
            description: item.description,
            supplier: item
                .supplier
                .unwrap_or_else(|| DEFAULT_ITEM_SUPPLIER.to_string()),
        }
    }
}

impl From<CreateInvoiceRequest> for NewInvoice {
    fn from(req: CreateInvoiceRequest) -> Self {
        Self {
            file_url: req.file_url,
            supplier: req.supplier,
            items: req.items.into_iter().map(NewInvoiceItem::from).collect(),
        }
    }
}

/// Response for a created invoice.
#[derive(Debug, Serialize)]
pub struct CreateInvoiceResponse {
    /// Id of the new invoice.
    pub invoice_id: RowId,
    /// The invoice row as stored.
    pub invoice: Invoice,
    /// The item rows as stored.
    pub items: Vec<InvoiceItem>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /invoices - Create an invoice with its line items.
async fn create_invoice(
    State(state): State<AppState>,
    extract::Json(payload): extract::Json<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<CreateInvoiceResponse>), ApiError> {
    let created = state.invoices.create_invoice(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateInvoiceResponse {
            invoice_id: created.invoice.id.clone(),
            invoice: created.invoice,
            items: created.items,
        }),
    ))
}
