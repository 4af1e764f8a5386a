//! Application configuration management.

use serde::Deserialize;

/// Placeholder replaced by the caller's question in the translator prompt.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Default NL-to-SQL prompt, embedding the two-table inventory schema.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "You are an AI that converts natural language queries into SQL.
Schema:
products(id, sku, name),
inventory(product_id, stock_on_hand).

Only return SQL. No explanation.
Query: {query}";

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Hosted store configuration.
    pub store: StoreConfig,
    /// Language model configuration.
    pub model: ModelConfig,
    /// NL-to-SQL translator configuration.
    #[serde(default)]
    pub translator: TranslatorConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed by CORS.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

/// Hosted store configuration.
#[derive(Clone, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the store's REST endpoint.
    pub url: String,
    /// Access key sent with every request.
    pub key: String,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("key", &"[redacted]")
            .finish()
    }
}

/// Language model configuration.
#[derive(Clone, Deserialize)]
pub struct ModelConfig {
    /// API key for the generative-language service.
    pub api_key: String,
    /// Base URL of the generative-language service.
    #[serde(default = "default_model_base_url")]
    pub base_url: String,
    /// Model tried first.
    #[serde(default = "default_primary_model")]
    pub primary_model: String,
    /// Smaller model tried once when the primary fails.
    #[serde(default = "default_fallback_model")]
    pub fallback_model: String,
}

impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("primary_model", &self.primary_model)
            .field("fallback_model", &self.fallback_model)
            .finish()
    }
}

fn default_model_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_primary_model() -> String {
    "gemini-1.5-pro".to_string()
}

fn default_fallback_model() -> String {
    "gemini-1.5-flash".to_string()
}

/// NL-to-SQL translator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslatorConfig {
    /// Prompt sent to the model; `{query}` is replaced by the caller's text.
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            prompt_template: default_prompt_template(),
        }
    }
}

fn default_prompt_template() -> String {
    DEFAULT_PROMPT_TEMPLATE.to_string()
}

/// Unprefixed variables that override the matching settings.
const LEGACY_VARS: [(&str, &str); 3] = [
    ("SUPABASE_URL", "store.url"),
    ("SUPABASE_KEY", "store.key"),
    ("GEMINI_API_KEY", "model.api_key"),
];

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`,
    /// `config/{RUN_MODE}`, `STOCKTAKE__*` variables, then the legacy
    /// `SUPABASE_URL`, `SUPABASE_KEY` and `GEMINI_API_KEY` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or a required
    /// value is missing or blank.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("STOCKTAKE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            );
        for (var, key) in LEGACY_VARS {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        let config = builder.build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects blank required values and a prompt template without a query slot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the offending setting.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let required = [
            ("store.url", &self.store.url),
            ("store.key", &self.store.key),
            ("model.api_key", &self.model.api_key),
            ("model.primary_model", &self.model.primary_model),
            ("model.fallback_model", &self.model.fallback_model),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(config::ConfigError::Message(format!("{key} must not be blank")));
            }
        }

        if !self.translator.prompt_template.contains(QUERY_PLACEHOLDER) {
            return Err(config::ConfigError::Message(format!(
                "translator.prompt_template must contain {QUERY_PLACEHOLDER}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CLEAR: [(&str, Option<&str>); 6] = [
        ("SUPABASE_URL", None),
        ("SUPABASE_KEY", None),
        ("GEMINI_API_KEY", None),
        ("STOCKTAKE__STORE__URL", None),
        ("STOCKTAKE__STORE__KEY", None),
        ("STOCKTAKE__MODEL__API_KEY", None),
    ];

    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let mut all: Vec<(&str, Option<&str>)> = CLEAR
            .iter()
            .filter(|(key, _)| !vars.iter().any(|(set, _)| set == key))
            .copied()
            .collect();
        all.extend_from_slice(vars);
        temp_env::with_vars(all, f);
    }

    #[test]
    fn test_load_from_legacy_variables() {
        with_env(
            &[
                ("SUPABASE_URL", Some("https://project.supabase.co")),
                ("SUPABASE_KEY", Some("service-key")),
                ("GEMINI_API_KEY", Some("gemini-key")),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.store.url, "https://project.supabase.co");
                assert_eq!(config.store.key, "service-key");
                assert_eq!(config.model.api_key, "gemini-key");
                assert_eq!(config.model.primary_model, "gemini-1.5-pro");
                assert_eq!(config.model.fallback_model, "gemini-1.5-flash");
                assert_eq!(config.server.port, 8000);
                assert_eq!(config.server.cors_origins, vec!["http://localhost:5173"]);
                assert_eq!(config.translator.prompt_template, DEFAULT_PROMPT_TEMPLATE);
            },
        );
    }

    #[test]
    fn test_legacy_variables_override_prefixed() {
        with_env(
            &[
                ("SUPABASE_URL", Some("https://legacy.supabase.co")),
                ("STOCKTAKE__STORE__URL", Some("https://prefixed.supabase.co")),
                ("STOCKTAKE__STORE__KEY", Some("service-key")),
                ("STOCKTAKE__MODEL__API_KEY", Some("gemini-key")),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.store.url, "https://legacy.supabase.co");
                assert_eq!(config.store.key, "service-key");
            },
        );
    }

    #[test]
    fn test_prefixed_variables_apply_without_legacy() {
        with_env(
            &[
                ("STOCKTAKE__STORE__URL", Some("https://prefixed.supabase.co")),
                ("STOCKTAKE__STORE__KEY", Some("service-key")),
                ("STOCKTAKE__MODEL__API_KEY", Some("gemini-key")),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.store.url, "https://prefixed.supabase.co");
            },
        );
    }

    #[test]
    fn test_missing_model_key_is_fatal() {
        with_env(
            &[
                ("SUPABASE_URL", Some("https://project.supabase.co")),
                ("SUPABASE_KEY", Some("service-key")),
            ],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }

    #[test]
    fn test_blank_store_key_is_fatal() {
        with_env(
            &[
                ("SUPABASE_URL", Some("https://project.supabase.co")),
                ("SUPABASE_KEY", Some("  ")),
                ("GEMINI_API_KEY", Some("gemini-key")),
            ],
            || {
                let err = AppConfig::load().unwrap_err();
                assert!(err.to_string().contains("store.key"));
            },
        );
    }

    fn valid_config() -> AppConfig {
        AppConfig {
            server: ServerConfig::default(),
            store: StoreConfig {
                url: "https://project.supabase.co".into(),
                key: "service-key".into(),
            },
            model: ModelConfig {
                api_key: "gemini-key".into(),
                base_url: default_model_base_url(),
                primary_model: default_primary_model(),
                fallback_model: default_fallback_model(),
            },
            translator: TranslatorConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[rstest]
    #[case("store.url", |c: &mut AppConfig| c.store.url = String::new())]
    #[case("store.key", |c: &mut AppConfig| c.store.key = " ".into())]
    #[case("model.api_key", |c: &mut AppConfig| c.model.api_key = "\t".into())]
    #[case("model.primary_model", |c: &mut AppConfig| c.model.primary_model = String::new())]
    #[case("model.fallback_model", |c: &mut AppConfig| c.model.fallback_model = "  ".into())]
    fn test_blank_required_value_is_rejected(
        #[case] key: &str,
        #[case] blank: fn(&mut AppConfig),
    ) {
        let mut config = valid_config();
        blank(&mut config);

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains(&format!("{key} must not be blank")));
    }

    #[test]
    fn test_template_without_placeholder_is_rejected() {
        let mut config = valid_config();
        config.translator.prompt_template = "Return SQL.".into();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("prompt_template"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let store = StoreConfig {
            url: "https://project.supabase.co".into(),
            key: "super-secret".into(),
        };
        let rendered = format!("{store:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
