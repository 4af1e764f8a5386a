//! Errors raised by the hosted store.
//!
//! The store itself lives behind the repository traits declared by each
//! service module; this module holds the failure type they share.

use thiserror::Error;

use stocktake_shared::AppError;

/// Hosted store operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The request never produced a response (connect, TLS, timeout).
    #[error("store request failed: {0}")]
    Request(String),

    /// The store answered with a non-success status.
    #[error("store returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// An insert or lookup that must echo rows returned none.
    #[error("store returned no rows for table {table}")]
    EmptyResult {
        /// Table the operation targeted.
        table: String,
    },

    /// The response body did not match the expected row shape.
    #[error("store response could not be decoded: {0}")]
    Decode(String),
}

impl StoreError {
    /// Create a request error.
    #[must_use]
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Create an empty result error.
    #[must_use]
    pub fn empty_result(table: impl Into<String>) -> Self {
        Self::EmptyResult {
            table: table.into(),
        }
    }

    /// Create a decode error.
    #[must_use]
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Database(err.to_string())
    }
}
