//! Hosted store layer.
//!
//! This crate provides:
//! - A REST client for the hosted store
//! - Repository implementations of the core store traits

pub mod client;
pub mod repositories;

pub use client::{Filter, FilterOp, StoreClient};
pub use repositories::{InventoryRepository, InvoiceRepository};

use stocktake_core::store::StoreError;
use stocktake_shared::config::StoreConfig;

/// Builds the shared store handle from configuration.
///
/// # Errors
///
/// Returns an error if the client cannot be built from the given settings.
pub fn connect(config: &StoreConfig) -> Result<StoreClient, StoreError> {
    StoreClient::new(config)
}
