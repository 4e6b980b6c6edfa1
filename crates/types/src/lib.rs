//! FinLit Types
//!
//! Shared domain types for the FinLit Advisor: budget arithmetic, model
//! catalog metadata, the text-generation provider contract and its errors.

pub mod budget;
pub mod models;
pub mod provider;
pub mod secret_string;

pub use budget::{BudgetBreakdown, BudgetRequest};
pub use models::{ModelInfo, ResolvedModel, GENERATE_CONTENT_METHOD};
pub use provider::{ProviderError, ProviderResult, TextProvider};
pub use secret_string::SecretString;

// Re-exported for implementors of the provider trait
pub use async_trait;
pub use serde_json;
