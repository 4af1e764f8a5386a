//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod inventory;
pub mod invoices;
pub mod nl_to_sql;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(invoices::routes())
        .merge(inventory::routes())
        .merge(nl_to_sql::routes())
}
