//! Google Gemini client
//!
//! Thin adapter over the Gemini REST API implementing [`TextProvider`].
//! Every transport failure is converted into a [`ProviderError`] at this
//! boundary; nothing above it sees a raw HTTP error.

use std::time::Duration;

use async_trait::async_trait;
use finlit_types::{ModelInfo, ProviderError, ProviderResult, SecretString, TextProvider};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Page size for catalog listing; large enough to cover the full catalog in
/// one request so fallback discovery sees provider order without pagination.
const LIST_MODELS_PAGE_SIZE: &str = "1000";

/// Gemini REST API client
pub struct GeminiClient {
	client: Client,
	api_key: SecretString,
	base_url: String,
}

impl std::fmt::Debug for GeminiClient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("GeminiClient")
			.field("base_url", &self.base_url)
			.field("api_key", &self.api_key)
			.finish()
	}
}

impl GeminiClient {
	/// Create a new client with an explicit base URL and request timeout
	pub fn new(
		api_key: SecretString,
		base_url: impl Into<String>,
		request_timeout_ms: u64,
	) -> ProviderResult<Self> {
		let client = Client::builder()
			.timeout(Duration::from_millis(request_timeout_ms))
			.build()?;

		Ok(Self {
			client,
			api_key,
			base_url: base_url.into(),
		})
	}

	/// Create a client against the public Gemini endpoint
	pub fn with_default_base_url(
		api_key: SecretString,
		request_timeout_ms: u64,
	) -> ProviderResult<Self> {
		Self::new(api_key, DEFAULT_BASE_URL, request_timeout_ms)
	}

	/// Normalize a model identifier to its bare path segment
	///
	/// The API accepts `gemini-1.5-flash` in paths but catalog entries are
	/// named `models/gemini-1.5-flash`; both forms appear in preference
	/// lists, so both must address the same model.
	fn model_path(model: &str) -> &str {
		model.strip_prefix("models/").unwrap_or(model)
	}

	/// Join a path onto the base URL and attach the API key
	fn build_url(&self, path: &str, query: &[(&str, &str)]) -> ProviderResult<Url> {
		let mut base =
			Url::parse(&self.base_url).map_err(|e| ProviderError::InvalidResponse {
				reason: format!("Invalid base URL '{}': {}", self.base_url, e),
			})?;

		if !base.path().ends_with('/') {
			base.set_path(&format!("{}/", base.path()));
		}

		let mut joined = base.join(path).map_err(|e| ProviderError::InvalidResponse {
			reason: format!("Failed to join URL path '{}': {}", path, e),
		})?;

		{
			let mut pairs = joined.query_pairs_mut();
			pairs.append_pair("key", self.api_key.expose_secret());
			for (name, value) in query {
				pairs.append_pair(name, value);
			}
		}

		Ok(joined)
	}

	/// Map an unsuccessful HTTP response to a provider error
	fn map_failure(status: StatusCode, body: &str) -> ProviderError {
		if body.trim().is_empty() {
			ProviderError::from_http_failure(status.as_u16())
		} else {
			ProviderError::http_failure(status.as_u16(), body.trim().to_string())
		}
	}
}

#[async_trait]
impl TextProvider for GeminiClient {
	fn name(&self) -> &str {
		"gemini"
	}

	async fn probe_model(&self, model: &str) -> ProviderResult<ModelInfo> {
		debug!("Probing Gemini model {}", model);

		let path = format!("models/{}", Self::model_path(model));
		let url = self.build_url(&path, &[])?;

		let response = self.client.get(url).send().await?;
		let status = response.status();

		if status == StatusCode::NOT_FOUND {
			return Err(ProviderError::ModelNotFound {
				model: model.to_string(),
			});
		}
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(Self::map_failure(status, &body));
		}

		let gemini_model: GeminiModel = response.json().await?;
		Ok(gemini_model.into())
	}

	async fn list_models(&self) -> ProviderResult<Vec<ModelInfo>> {
		debug!("Listing Gemini model catalog");

		let url = self.build_url("models", &[("pageSize", LIST_MODELS_PAGE_SIZE)])?;

		let response = self.client.get(url).send().await?;
		let status = response.status();

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(Self::map_failure(status, &body));
		}

		let listing: ListModelsResponse = response.json().await?;
		Ok(listing.models.into_iter().map(Into::into).collect())
	}

	async fn generate(&self, model: &str, prompt: &str) -> ProviderResult<String> {
		debug!("Gemini generate: model={}", model);

		let path = format!("models/{}:generateContent", Self::model_path(model));
		let url = self.build_url(&path, &[])?;

		let request = GenerateContentRequest {
			contents: vec![Content {
				role: Some("user".to_string()),
				parts: vec![Part {
					text: prompt.to_string(),
				}],
			}],
		};

		let response = self.client.post(url).json(&request).send().await?;
		let status = response.status();

		if status == StatusCode::NOT_FOUND {
			return Err(ProviderError::ModelNotFound {
				model: model.to_string(),
			});
		}
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			warn!("Gemini generation failed for {}: HTTP {}", model, status);
			return Err(Self::map_failure(status, &body));
		}

		let generated: GenerateContentResponse = response.json().await?;
		let text = generated.into_text();

		if text.is_empty() {
			return Err(ProviderError::EmptyCompletion {
				model: model.to_string(),
			});
		}

		Ok(text)
	}
}

// Gemini wire types

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
	contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
	#[serde(skip_serializing_if = "Option::is_none", default)]
	role: Option<String>,
	#[serde(default)]
	parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
	text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
	#[serde(default)]
	candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
	/// Concatenate the text parts of the first candidate
	fn into_text(self) -> String {
		self.candidates
			.into_iter()
			.next()
			.and_then(|candidate| candidate.content)
			.map(|content| {
				content
					.parts
					.into_iter()
					.map(|part| part.text)
					.collect::<Vec<_>>()
					.join("")
			})
			.unwrap_or_default()
	}
}

#[derive(Debug, Deserialize)]
struct Candidate {
	content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ListModelsResponse {
	#[serde(default)]
	models: Vec<GeminiModel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiModel {
	name: String,
	display_name: Option<String>,
	#[serde(default)]
	supported_generation_methods: Vec<String>,
}

impl From<GeminiModel> for ModelInfo {
	fn from(model: GeminiModel) -> Self {
		ModelInfo {
			name: model.name,
			display_name: model.display_name,
			supported_generation_methods: model.supported_generation_methods,
		}
	}
}
