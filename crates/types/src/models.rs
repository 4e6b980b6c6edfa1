//! Model catalog metadata and the resolved-model handle

use serde::{Deserialize, Serialize};

/// Generation method a model must advertise to serve text requests
pub const GENERATE_CONTENT_METHOD: &str = "generateContent";

/// Catalog entry returned by the provider's model listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
	/// Provider-specific model identifier, e.g. `models/gemini-1.5-flash`
	pub name: String,
	pub display_name: Option<String>,
	/// Capabilities the provider advertises for this model
	pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			display_name: None,
			supported_generation_methods: Vec::new(),
		}
	}

	pub fn with_methods<I, S>(mut self, methods: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.supported_generation_methods = methods.into_iter().map(Into::into).collect();
		self
	}

	/// Whether this model can serve text-generation requests
	pub fn supports_generation(&self) -> bool {
		self.supported_generation_methods
			.iter()
			.any(|method| method == GENERATE_CONTENT_METHOD)
	}
}

/// A model identifier that probed successfully during resolution
///
/// Immutable once constructed; one instance is shared read-only across all
/// requests for the lifetime of the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModel {
	name: String,
}

impl ResolvedModel {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

impl From<ModelInfo> for ResolvedModel {
	fn from(info: ModelInfo) -> Self {
		Self::new(info.name)
	}
}
