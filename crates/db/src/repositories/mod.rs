//! Repository abstractions for data access.
//!
//! Repositories implement the core crate's store traits on top of
//! [`StoreClient`](crate::client::StoreClient), hiding table names and filter
//! syntax from the rest of the application.

pub mod inventory;
pub mod invoice;

pub use inventory::InventoryRepository;
pub use invoice::InvoiceRepository;
