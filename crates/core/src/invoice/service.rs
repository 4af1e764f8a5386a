//! Invoice service implementation.

use std::sync::Arc;

use tracing::{error, info, warn};

use stocktake_shared::RowId;

use super::error::InvoiceError;
use super::types::{CreatedInvoice, Invoice, InvoiceItem, NewInvoice, NewInvoiceItem, NewInvoiceRecord};
use super::validation::validate_invoice;
use crate::store::StoreError;

/// Table holding invoice rows.
pub const INVOICES_TABLE: &str = "invoices";
/// Table holding invoice line items.
pub const INVOICE_ITEMS_TABLE: &str = "invoice_items";

/// Repository trait for invoice persistence.
///
/// This trait is implemented by the db crate against the hosted store.
pub trait InvoiceStore: Send + Sync {
    /// Insert one invoice row; `None` when the store echoes nothing back.
    fn insert_invoice(
        &self,
        record: &NewInvoiceRecord,
    ) -> impl std::future::Future<Output = Result<Option<Invoice>, StoreError>> + Send;

    /// Insert a batch of items, returning the rows the store echoes.
    fn insert_items(
        &self,
        items: &[NewInvoiceItem],
    ) -> impl std::future::Future<Output = Result<Vec<InvoiceItem>, StoreError>> + Send;

    /// Delete an invoice by id. Returns whether a row was removed.
    fn delete_invoice(
        &self,
        id: &RowId,
    ) -> impl std::future::Future<Output = Result<bool, StoreError>> + Send;

    /// Find an invoice by id.
    fn find_invoice(
        &self,
        id: &RowId,
    ) -> impl std::future::Future<Output = Result<Option<Invoice>, StoreError>> + Send;
}

/// Writes invoices and their items as one logical unit.
///
/// The two inserts are separate store calls. When the items insert fails the
/// invoice is deleted again, but this is compensation, not a transaction: a
/// crash between the two leaves an invoice with no items behind.
pub struct InvoiceService<S: InvoiceStore> {
    store: Arc<S>,
}

impl<S: InvoiceStore> InvoiceService<S> {
    /// Create a new invoice service.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create an invoice and attach its items.
    ///
    /// Each item has the new invoice's id written into it before the batch
    /// insert. The returned rows are the ones echoed by the store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Validation fails (nothing is written)
    /// - The invoice insert fails or echoes no row
    /// - The items insert fails or echoes no rows; the invoice is then
    ///   deleted and `RolledBack` is returned, or `Orphaned` if the delete fails
    ///   or removes nothing
    pub async fn create_invoice(&self, input: NewInvoice) -> Result<CreatedInvoice, InvoiceError> {
        validate_invoice(&input)?;

        let record = NewInvoiceRecord::from_input(&input);
        let invoice = self
            .store
            .insert_invoice(&record)
            .await
            .and_then(|row| row.ok_or_else(|| StoreError::empty_result(INVOICES_TABLE)))
            .map_err(InvoiceError::InvoiceInsert)?;

        let mut items = input.items;
        for item in &mut items {
            item.invoice_id = Some(invoice.id.clone());
        }

        let inserted = match self.store.insert_items(&items).await {
            Ok(rows) if rows.is_empty() => Err(StoreError::empty_result(INVOICE_ITEMS_TABLE)),
            other => other,
        };

        match inserted {
            Ok(items) => {
                info!(
                    invoice_id = %invoice.id,
                    supplier = %invoice.supplier,
                    item_count = items.len(),
                    "Invoice created"
                );
                Ok(CreatedInvoice { invoice, items })
            }
            Err(source) => Err(self.roll_back(invoice.id, source).await),
        }
    }

    /// Find an invoice by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lookup fails.
    pub async fn find_invoice(&self, id: &RowId) -> Result<Option<Invoice>, StoreError> {
        self.store.find_invoice(id).await
    }

    async fn roll_back(&self, invoice_id: RowId, source: StoreError) -> InvoiceError {
        warn!(
            invoice_id = %invoice_id,
            error = %source,
            "Invoice items insert failed, deleting invoice"
        );

        let deleted = match self.store.delete_invoice(&invoice_id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(StoreError::empty_result(INVOICES_TABLE)),
            Err(err) => Err(err),
        };

        match deleted {
            Ok(()) => InvoiceError::RolledBack { invoice_id, source },
            Err(rollback_error) => {
                error!(
                    invoice_id = %invoice_id,
                    error = %rollback_error,
                    "Rollback delete failed, invoice left without items"
                );
                InvoiceError::Orphaned {
                    invoice_id,
                    source,
                    rollback_error,
                }
            }
        }
    }
}
