//! Invoice creation with compensating rollback.
//!
//! This module provides business logic for writing an invoice and its line
//! items as one logical unit:
//! - Input validation
//! - Invoice insert, then a batch insert of items carrying its id
//! - Best-effort delete of the invoice when the items insert fails

mod error;
mod service;
mod types;
mod validation;

pub use error::InvoiceError;
pub use service::{INVOICE_ITEMS_TABLE, INVOICES_TABLE, InvoiceService, InvoiceStore};
pub use types::{
    CreatedInvoice, DEFAULT_CATEGORY, DEFAULT_ITEM_SUPPLIER, Invoice, InvoiceItem,
    MANUAL_ENTRY_FILE_URL, NewInvoice, NewInvoiceItem, NewInvoiceRecord,
};
pub use validation::validate_invoice;
