//! Core provider trait implemented by model clients

use super::ProviderResult;
use crate::models::ModelInfo;
use async_trait::async_trait;
use std::fmt::Debug;

/// Contract for a hosted text-generation service
///
/// `probe_model` is the instantiation attempt used during model resolution:
/// it succeeds only when the named model exists and is callable. Resolution
/// treats any probe error as "try the next candidate".
#[async_trait]
pub trait TextProvider: Send + Sync + Debug {
	/// Human-readable provider name, used in logs
	fn name(&self) -> &str;

	/// Check that a named model exists and report its capabilities
	async fn probe_model(&self, model: &str) -> ProviderResult<ModelInfo>;

	/// List the full model catalog with supported capabilities
	async fn list_models(&self) -> ProviderResult<Vec<ModelInfo>>;

	/// Submit a prompt to the named model and return the generated text
	async fn generate(&self, model: &str, prompt: &str) -> ProviderResult<String>;
}
