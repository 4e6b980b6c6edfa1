//! FinLit Provider
//!
//! HTTP client for the hosted text-generation service. The only provider
//! implemented is Google Gemini; test doubles live with the root crate.

pub mod gemini;

pub use finlit_types::{ProviderError, ProviderResult, TextProvider};
pub use gemini::GeminiClient;
