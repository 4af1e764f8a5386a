//! Language model error types.

use thiserror::Error;

use stocktake_shared::AppError;

/// A single model call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The request never produced a response.
    #[error("model request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("model returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// The response carried no generated text.
    #[error("model returned no text")]
    EmptyResponse,

    /// The response body did not match the expected shape.
    #[error("model response could not be decoded: {0}")]
    Decode(String),
}

impl GenerationError {
    /// Create a request error.
    #[must_use]
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Create a decode error.
    #[must_use]
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

/// Both the primary and the fallback model failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{primary_model} failed ({primary}); fallback {fallback_model} failed ({fallback})")]
pub struct ModelError {
    /// Model tried first.
    pub primary_model: String,
    /// Model tried second.
    pub fallback_model: String,
    /// Why the primary failed.
    pub primary: GenerationError,
    /// Why the fallback failed.
    pub fallback: GenerationError,
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        Self::ExternalService(err.to_string())
    }
}
