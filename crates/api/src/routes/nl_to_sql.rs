//! Natural-language to SQL route.
//!
//! The generated SQL is returned to the caller and never executed here.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;
use crate::extract;

/// Creates the NL-to-SQL routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/nl-to-sql", post(nl_to_sql))
}

/// Request body for a translation.
#[derive(Debug, Deserialize)]
pub struct NlQueryRequest {
    /// Question in plain language.
    pub text: String,
}

/// Response carrying the generated SQL.
#[derive(Debug, Serialize)]
pub struct SqlResponse {
    /// Model output, whitespace trimmed.
    pub sql: String,
}

/// POST /nl-to-sql - Translate a question into SQL.
async fn nl_to_sql(
    State(state): State<AppState>,
    extract::Json(payload): extract::Json<NlQueryRequest>,
) -> Result<Json<SqlResponse>, ApiError> {
    let sql = state.translator.translate(&payload.text).await?;
    Ok(Json(SqlResponse { sql }))
}
