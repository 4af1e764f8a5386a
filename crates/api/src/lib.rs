//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Request extractors and response types
//! - Error rendering

pub mod error;
pub mod extract;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use stocktake_ai::GeminiClient;
use stocktake_core::inventory::InventoryService;
use stocktake_core::invoice::InvoiceService;
use stocktake_core::translator::Translator;
use stocktake_db::{InventoryRepository, InvoiceRepository};
use stocktake_shared::{AppConfig, AppError, AppResult};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Invoice writer.
    pub invoices: Arc<InvoiceService<InvoiceRepository>>,
    /// Low-stock reader.
    pub inventory: Arc<InventoryService<InventoryRepository>>,
    /// NL-to-SQL translator.
    pub translator: Arc<Translator<GeminiClient>>,
}

impl AppState {
    /// Builds the store and model clients and the services on top of them.
    ///
    /// # Errors
    ///
    /// Returns an error if either client cannot be built from the settings.
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let store = stocktake_db::connect(&config.store)?;
        let model = GeminiClient::new(&config.model)
            .map_err(|e| AppError::Internal(format!("failed to build model client: {e}")))?;

        Ok(Self {
            invoices: Arc::new(InvoiceService::new(Arc::new(InvoiceRepository::new(
                store.clone(),
            )))),
            inventory: Arc::new(InventoryService::new(Arc::new(InventoryRepository::new(
                store,
            )))),
            translator: Arc::new(Translator::from_config(
                Arc::new(model),
                &config.model,
                &config.translator,
            )),
        })
    }
}

/// Creates the main application router.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
