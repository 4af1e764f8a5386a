//! HTTP client for the hosted store's REST interface.
//!
//! The store exposes every table at `{url}/rest/v1/{table}` (PostgREST).
//! Filters travel as query parameters of the form `column=op.value`, and
//! writes ask for `return=representation` so inserted or deleted rows are
//! echoed back.

use std::fmt;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use stocktake_core::store::StoreError;
use stocktake_shared::config::StoreConfig;

const PREFER_REPRESENTATION: &str = "return=representation";

/// Comparison operator of a row filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// `column = value`
    Eq,
    /// `column < value`
    Lt,
}

impl FilterOp {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Lt => "lt",
        }
    }
}

/// Row filter applied to a select or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    column: String,
    op: FilterOp,
    value: String,
}

impl Filter {
    /// Match rows where `column` equals `value`.
    #[must_use]
    pub fn eq(column: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            column: column.into(),
            op: FilterOp::Eq,
            value: value.to_string(),
        }
    }

    /// Match rows where `column` is strictly less than `value`.
    #[must_use]
    pub fn lt(column: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            column: column.into(),
            op: FilterOp::Lt,
            value: value.to_string(),
        }
    }

    /// Query parameter for this filter.
    #[must_use]
    pub fn query_pair(&self) -> (String, String) {
        (
            self.column.clone(),
            format!("{}.{}", self.op.as_str(), self.value),
        )
    }
}

/// Configured handle to the hosted store.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    rest_url: String,
}

impl fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreClient")
            .field("rest_url", &self.rest_url)
            .finish_non_exhaustive()
    }
}

impl StoreClient {
    /// Create a client for the store at `config.url`, authenticating with
    /// `config.key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();

        let mut api_key = HeaderValue::from_str(&config.key)
            .map_err(|e| StoreError::request(format!("invalid store key: {e}")))?;
        api_key.set_sensitive(true);
        headers.insert("apikey", api_key);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.key))
            .map_err(|e| StoreError::request(format!("invalid store key: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::request(e.to_string()))?;

        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", config.url.trim_end_matches('/')),
        })
    }

    /// Insert `rows` into `table`, returning the rows as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the store rejects it, or the
    /// echoed rows cannot be decoded as `T`.
    pub async fn insert<B, T>(&self, table: &str, rows: &B) -> Result<Vec<T>, StoreError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::POST, table)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(rows);
        Self::send(request, table).await
    }

    /// Select `columns` from the rows of `table` matching every filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the store rejects it, or the
    /// rows cannot be decoded as `T`.
    pub async fn select<T>(
        &self,
        table: &str,
        columns: &str,
        filters: &[Filter],
    ) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let mut query = vec![("select".to_string(), columns.to_string())];
        query.extend(filters.iter().map(Filter::query_pair));

        let request = self.request(Method::GET, table).query(&query);
        Self::send(request, table).await
    }

    /// Delete the rows of `table` matching every filter, returning them.
    ///
    /// # Errors
    ///
    /// Returns an error if no filter is given, the request fails, the store
    /// rejects it, or the deleted rows cannot be decoded as `T`.
    pub async fn delete<T>(&self, table: &str, filters: &[Filter]) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        if filters.is_empty() {
            return Err(StoreError::request(format!(
                "refusing to delete from {table} without a filter"
            )));
        }

        let query: Vec<(String, String)> = filters.iter().map(Filter::query_pair).collect();
        let request = self
            .request(Method::DELETE, table)
            .header("Prefer", PREFER_REPRESENTATION)
            .query(&query);
        Self::send(request, table).await
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.http.request(method, format!("{}/{table}", self.rest_url))
    }

    async fn send<T>(request: RequestBuilder, table: &str) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(table, status = status.as_u16(), "Store rejected request");
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::decode(e.to_string()))
    }
}
