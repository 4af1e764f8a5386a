//! Natural-language to SQL translation through a hosted language model.
//!
//! The prompt template (schema description included) comes from
//! configuration. A failed call to the primary model is retried exactly once
//! against the fallback model.

mod error;
mod prompt;
mod service;

pub use error::{GenerationError, ModelError};
pub use prompt::build_prompt;
pub use service::{LanguageModel, Translator};
