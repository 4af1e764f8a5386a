//! Hosted language model layer.
//!
//! Implements the core `LanguageModel` trait against the Gemini
//! generative-language REST API.

pub mod gemini;

pub use gemini::GeminiClient;
