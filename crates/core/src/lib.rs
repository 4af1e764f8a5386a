//! Core business logic for Stocktake.
//!
//! This crate contains pure business logic with ZERO web or HTTP-client
//! dependencies. The hosted store and the language model are reached only
//! through the traits declared here, which the db and ai crates implement.
//!
//! # Modules
//!
//! - `invoice` - Invoice + line item writes with compensating rollback
//! - `inventory` - Low-stock listing and stock classification
//! - `translator` - NL-to-SQL prompt building with model fallback
//! - `store` - Store failure type shared by the repositories

pub mod inventory;
pub mod invoice;
pub mod store;
pub mod translator;
