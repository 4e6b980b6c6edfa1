//! Mock providers for examples and testing
//!
//! A simple, scriptable [`TextProvider`] so the web layer and the builder
//! can be exercised without touching the network.

use async_trait::async_trait;
use finlit_types::{
	ModelInfo, ProviderError, ProviderResult, TextProvider, GENERATE_CONTENT_METHOD,
};

/// Canned reply returned by the mock provider
pub const MOCK_REPLY: &str = "Start with a small emergency fund, then give every dollar a job.";

/// Scriptable mock provider
///
/// Probes succeed for the configured usable models, the catalog is returned
/// verbatim, and every generation request answers with [`MOCK_REPLY`].
/// Either phase can be told to fail.
#[derive(Debug, Clone)]
pub struct MockProvider {
	pub usable_models: Vec<String>,
	pub catalog: Vec<ModelInfo>,
	pub fail_generation: bool,
	pub fail_listing: bool,
}

impl MockProvider {
	/// Provider that knows the default Gemini model pair
	pub fn new() -> Self {
		let usable_models = vec!["gemini-1.5-flash".to_string(), "gemini-1.5-pro".to_string()];
		let catalog = usable_models
			.iter()
			.map(|name| {
				ModelInfo::new(format!("models/{}", name)).with_methods([GENERATE_CONTENT_METHOD])
			})
			.collect();

		Self {
			usable_models,
			catalog,
			fail_generation: false,
			fail_listing: false,
		}
	}

	/// Provider with no usable models and a failing catalog
	pub fn unavailable() -> Self {
		Self {
			usable_models: Vec::new(),
			catalog: Vec::new(),
			fail_generation: false,
			fail_listing: true,
		}
	}

	/// Keep models resolvable but make every generation call fail
	pub fn with_failing_generation(mut self) -> Self {
		self.fail_generation = true;
		self
	}
}

impl Default for MockProvider {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl TextProvider for MockProvider {
	fn name(&self) -> &str {
		"mock"
	}

	async fn probe_model(&self, model: &str) -> ProviderResult<ModelInfo> {
		let bare = model.strip_prefix("models/").unwrap_or(model);
		if self.usable_models.iter().any(|usable| usable == bare) {
			Ok(ModelInfo::new(format!("models/{}", bare)).with_methods([GENERATE_CONTENT_METHOD]))
		} else {
			Err(ProviderError::ModelNotFound {
				model: model.to_string(),
			})
		}
	}

	async fn list_models(&self) -> ProviderResult<Vec<ModelInfo>> {
		if self.fail_listing {
			return Err(ProviderError::from_http_failure(503));
		}
		Ok(self.catalog.clone())
	}

	async fn generate(&self, _model: &str, _prompt: &str) -> ProviderResult<String> {
		if self.fail_generation {
			return Err(ProviderError::from_http_failure(429));
		}
		Ok(MOCK_REPLY.to_string())
	}
}
