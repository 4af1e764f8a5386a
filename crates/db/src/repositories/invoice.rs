//! Invoice repository for store operations.
//!
//! Implements the core `InvoiceStore` trait against the `invoices` and
//! `invoice_items` tables.

use serde_json::Value;

use stocktake_core::invoice::{
    INVOICE_ITEMS_TABLE, INVOICES_TABLE, Invoice, InvoiceItem, InvoiceStore, NewInvoiceItem,
    NewInvoiceRecord,
};
use stocktake_core::store::StoreError;
use stocktake_shared::RowId;

use crate::client::{Filter, StoreClient};

/// Invoice repository implementation.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    client: StoreClient,
}

impl InvoiceRepository {
    /// Create a new invoice repository.
    #[must_use]
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

impl InvoiceStore for InvoiceRepository {
    async fn insert_invoice(&self, record: &NewInvoiceRecord) -> Result<Option<Invoice>, StoreError> {
        let rows: Vec<Invoice> = self
            .client
            .insert(INVOICES_TABLE, std::slice::from_ref(record))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn insert_items(&self, items: &[NewInvoiceItem]) -> Result<Vec<InvoiceItem>, StoreError> {
        self.client.insert(INVOICE_ITEMS_TABLE, items).await
    }

    async fn delete_invoice(&self, id: &RowId) -> Result<bool, StoreError> {
        let deleted: Vec<Value> = self
            .client
            .delete(INVOICES_TABLE, &[Filter::eq("id", id)])
            .await?;
        Ok(!deleted.is_empty())
    }

    async fn find_invoice(&self, id: &RowId) -> Result<Option<Invoice>, StoreError> {
        let rows: Vec<Invoice> = self
            .client
            .select(INVOICES_TABLE, "*", &[Filter::eq("id", id)])
            .await?;
        Ok(rows.into_iter().next())
    }
}
