//! Invoice error types.

use thiserror::Error;

use stocktake_shared::{AppError, RowId};

use crate::store::StoreError;

/// Invoice write errors.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// Caller input was rejected before any store call.
    #[error("{0}")]
    Validation(String),

    /// The invoice row could not be inserted.
    #[error("failed to insert invoice: {0}")]
    InvoiceInsert(#[source] StoreError),

    /// The items could not be inserted; the invoice was deleted again.
    #[error("failed to insert invoice items: {source}; invoice {invoice_id} rolled back")]
    RolledBack {
        /// Invoice that was inserted and then deleted.
        invoice_id: RowId,
        /// Why the items insert failed.
        source: StoreError,
    },

    /// The items could not be inserted and the compensating delete failed too.
    #[error(
        "failed to insert invoice items: {source}; rollback failed, invoice {invoice_id} orphaned: {rollback_error}"
    )]
    Orphaned {
        /// Invoice left behind without items.
        invoice_id: RowId,
        /// Why the items insert failed.
        source: StoreError,
        /// Why the compensating delete failed.
        rollback_error: StoreError,
    },
}

impl InvoiceError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<InvoiceError> for AppError {
    fn from(err: InvoiceError) -> Self {
        match err {
            InvoiceError::Validation(msg) => Self::Validation(msg),
            other => Self::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolled_back_message_names_invoice() {
        let err = InvoiceError::RolledBack {
            invoice_id: RowId::Int(9),
            source: StoreError::empty_result("invoice_items"),
        };
        let msg = err.to_string();
        assert!(msg.contains("invoice 9 rolled back"));
        assert!(msg.contains("invoice_items"));
    }

    #[test]
    fn test_validation_maps_to_app_validation() {
        let app: AppError = InvoiceError::validation("supplier is required").into();
        assert!(matches!(app, AppError::Validation(ref m) if m == "supplier is required"));
        assert_eq!(app.status_code(), 400);
    }

    #[test]
    fn test_store_failures_map_to_database() {
        let app: AppError =
            InvoiceError::InvoiceInsert(StoreError::request("connection refused")).into();
        assert!(matches!(app, AppError::Database(_)));
    }
}
