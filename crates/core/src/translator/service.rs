//! NL-to-SQL translator with single fallback.

use std::sync::Arc;

use tracing::{info, warn};

use stocktake_shared::config::{ModelConfig, TranslatorConfig};

use super::error::{GenerationError, ModelError};
use super::prompt::build_prompt;

/// Text-generation backend.
///
/// This trait is implemented by the ai crate against the hosted model service.
pub trait LanguageModel: Send + Sync {
    /// Generate text for `prompt` with the named model.
    fn generate(
        &self,
        model: &str,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, GenerationError>> + Send;
}

/// Translates natural-language questions into SQL.
///
/// The model output is returned as-is (whitespace trimmed); it is not checked
/// to be SQL, let alone safe SQL.
pub struct Translator<M: LanguageModel> {
    model: Arc<M>,
    prompt_template: String,
    primary_model: String,
    fallback_model: String,
}

impl<M: LanguageModel> Translator<M> {
    /// Create a new translator.
    #[must_use]
    pub fn new(
        model: Arc<M>,
        prompt_template: impl Into<String>,
        primary_model: impl Into<String>,
        fallback_model: impl Into<String>,
    ) -> Self {
        Self {
            model,
            prompt_template: prompt_template.into(),
            primary_model: primary_model.into(),
            fallback_model: fallback_model.into(),
        }
    }

    /// Create a translator from the model and translator settings.
    #[must_use]
    pub fn from_config(model: Arc<M>, models: &ModelConfig, translator: &TranslatorConfig) -> Self {
        Self::new(
            model,
            translator.prompt_template.clone(),
            models.primary_model.clone(),
            models.fallback_model.clone(),
        )
    }

    /// Translate `text` into SQL.
    ///
    /// The primary model is called once; on any failure the fallback model is
    /// called once.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` carrying both failures if the fallback fails too.
    pub async fn translate(&self, text: &str) -> Result<String, ModelError> {
        let prompt = build_prompt(&self.prompt_template, text);

        let primary = match self.model.generate(&self.primary_model, &prompt).await {
            Ok(sql) => return Ok(sql.trim().to_string()),
            Err(err) => err,
        };

        warn!(
            model = %self.primary_model,
            fallback = %self.fallback_model,
            error = %primary,
            "Primary model failed, falling back"
        );

        match self.model.generate(&self.fallback_model, &prompt).await {
            Ok(sql) => {
                info!(model = %self.fallback_model, "Fallback model answered");
                Ok(sql.trim().to_string())
            }
            Err(fallback) => Err(ModelError {
                primary_model: self.primary_model.clone(),
                fallback_model: self.fallback_model.clone(),
                primary,
                fallback,
            }),
        }
    }
}
