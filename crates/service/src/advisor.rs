//! Advisor orchestration: request in, text out, always

use std::sync::Arc;

use finlit_types::{BudgetBreakdown, BudgetRequest, ResolvedModel, TextProvider};
use tracing::{debug, info, warn};

use crate::prompts;
use crate::resolver::ModelResolver;

/// Fixed message returned when no model could be resolved
pub const MODEL_UNAVAILABLE_MESSAGE: &str =
	"AI model not available. Please check your API key and internet connection.";

/// Orchestrates prompt construction and generation for both advisor tools
///
/// Holds the provider and the model resolved once at construction; requests
/// share that handle read-only, so no locking is needed. Both operations
/// guarantee a string result: an unavailable model and a failed generation
/// call each degrade to a descriptive message, never an error.
pub struct AdvisorService {
	provider: Arc<dyn TextProvider>,
	model: Option<ResolvedModel>,
}

impl AdvisorService {
	/// Resolve a model against the provider and construct the service
	///
	/// Resolution failure is not fatal here; the service starts in the
	/// degraded "unavailable" state and every call reports it.
	pub async fn initialize(
		provider: Arc<dyn TextProvider>,
		preferred_models: Vec<String>,
	) -> Self {
		let resolver = ModelResolver::new(preferred_models);
		let model = resolver.resolve(provider.as_ref()).await;

		match &model {
			Some(resolved) => info!("Advisor ready with model {}", resolved.name()),
			None => warn!("Advisor starting without a usable model; responses will degrade"),
		}

		Self { provider, model }
	}

	/// Construct with an already-resolved model (or none)
	///
	/// Skips resolution entirely; used by tests and the diagnostics tooling.
	pub fn with_model(provider: Arc<dyn TextProvider>, model: Option<ResolvedModel>) -> Self {
		Self { provider, model }
	}

	/// Name of the resolved model, if any
	pub fn model_name(&self) -> Option<&str> {
		self.model.as_ref().map(ResolvedModel::name)
	}

	/// Whether a model was resolved
	pub fn is_ready(&self) -> bool {
		self.model.is_some()
	}

	/// Financial-literacy information for a free-text topic
	///
	/// Empty or blank topics are permitted and passed through to the model.
	pub async fn provide_info(&self, topic: &str) -> String {
		let Some(model) = &self.model else {
			return MODEL_UNAVAILABLE_MESSAGE.to_string();
		};

		debug!("Generating literacy response for topic ({} chars)", topic.len());

		let prompt = prompts::literacy_prompt(topic);
		match self.provider.generate(model.name(), &prompt).await {
			Ok(text) => text,
			Err(e) => {
				warn!("Literacy generation failed: {}", e);
				format!("Sorry, I encountered an error: {}. Please try again.", e)
			},
		}
	}

	/// Budget assessment and suggestions for four numeric figures
	///
	/// Derived metrics are computed here; the raw figures are not validated
	/// beyond what the arithmetic itself requires.
	pub async fn analyze_and_suggest(&self, request: &BudgetRequest) -> String {
		let Some(model) = &self.model else {
			return MODEL_UNAVAILABLE_MESSAGE.to_string();
		};

		let breakdown = BudgetBreakdown::from_request(request);
		debug!(
			"Analyzing budget: total {:.2}, remaining {:.2}",
			breakdown.total_expenses, breakdown.remaining
		);

		let prompt = prompts::budget_prompt(request, &breakdown);
		match self.provider.generate(model.name(), &prompt).await {
			Ok(text) => text,
			Err(e) => {
				warn!("Budget generation failed: {}", e);
				format!(
					"Sorry, I encountered an error: {}. Please check your input values and try again.",
					e
				)
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use finlit_types::{ModelInfo, ProviderError, ProviderResult};

	/// Provider double that either echoes the prompt or always fails
	#[derive(Debug)]
	struct ScriptedProvider {
		fail_generation: bool,
	}

	#[async_trait]
	impl TextProvider for ScriptedProvider {
		fn name(&self) -> &str {
			"scripted"
		}

		async fn probe_model(&self, model: &str) -> ProviderResult<ModelInfo> {
			Ok(ModelInfo::new(model).with_methods(["generateContent"]))
		}

		async fn list_models(&self) -> ProviderResult<Vec<ModelInfo>> {
			Ok(vec![])
		}

		async fn generate(&self, _model: &str, prompt: &str) -> ProviderResult<String> {
			if self.fail_generation {
				Err(ProviderError::from_http_failure(429))
			} else {
				Ok(format!("generated for: {}", prompt))
			}
		}
	}

	fn ready_service(fail_generation: bool) -> AdvisorService {
		AdvisorService::with_model(
			Arc::new(ScriptedProvider { fail_generation }),
			Some(ResolvedModel::new("models/gemini-1.5-flash")),
		)
	}

	fn unavailable_service() -> AdvisorService {
		AdvisorService::with_model(Arc::new(ScriptedProvider { fail_generation: false }), None)
	}

	#[tokio::test]
	async fn test_provide_info_returns_model_text_verbatim() {
		let service = ready_service(false);
		let response = service.provide_info("emergency fund").await;

		assert!(response.starts_with("generated for: "));
		assert!(response.contains("emergency fund"));
	}

	#[tokio::test]
	async fn test_provide_info_without_model_returns_fixed_message() {
		let service = unavailable_service();
		let response = service.provide_info("emergency fund").await;

		assert_eq!(response, MODEL_UNAVAILABLE_MESSAGE);
	}

	#[tokio::test]
	async fn test_provide_info_is_non_empty_for_empty_topic() {
		for service in [ready_service(false), unavailable_service()] {
			let response = service.provide_info("").await;
			assert!(!response.is_empty());
		}
	}

	#[tokio::test]
	async fn test_provide_info_degrades_generation_failure_to_text() {
		let service = ready_service(true);
		let response = service.provide_info("budgeting").await;

		assert!(response.starts_with("Sorry, I encountered an error"));
		assert!(response.contains("429"));
		assert!(response.contains("Please try again."));
	}

	#[tokio::test]
	async fn test_analyze_and_suggest_embeds_breakdown_in_prompt() {
		let service = ready_service(false);
		let request = BudgetRequest::new(5000.0, 2500.0, 1500.0, 1000.0);
		let response = service.analyze_and_suggest(&request).await;

		assert!(response.contains("Monthly Income: $5,000.00"));
		assert!(response.contains("(50.0%)"));
		assert!(response.contains("(30.0%)"));
		assert!(response.contains("(20.0%)"));
	}

	#[tokio::test]
	async fn test_analyze_and_suggest_zero_income_does_not_panic() {
		let service = ready_service(false);
		let request = BudgetRequest::new(0.0, 100.0, 50.0, 25.0);
		let response = service.analyze_and_suggest(&request).await;

		assert!(response.contains("(0.0%)"));
	}

	#[tokio::test]
	async fn test_analyze_and_suggest_degrades_failure_to_text() {
		let service = ready_service(true);
		let request = BudgetRequest::new(5000.0, 2500.0, 1500.0, 1000.0);
		let response = service.analyze_and_suggest(&request).await;

		assert!(response.starts_with("Sorry, I encountered an error"));
		assert!(response.contains("Please check your input values"));
	}

	#[tokio::test]
	async fn test_analyze_and_suggest_without_model_returns_fixed_message() {
		let service = unavailable_service();
		let request = BudgetRequest::new(5000.0, 2500.0, 1500.0, 1000.0);

		assert_eq!(
			service.analyze_and_suggest(&request).await,
			MODEL_UNAVAILABLE_MESSAGE
		);
	}

	#[tokio::test]
	async fn test_initialize_resolves_first_preferred_model() {
		let provider = Arc::new(ScriptedProvider {
			fail_generation: false,
		});
		let service = AdvisorService::initialize(
			provider,
			vec!["gemini-1.5-flash".to_string(), "gemini-1.5-pro".to_string()],
		)
		.await;

		assert!(service.is_ready());
		assert_eq!(service.model_name(), Some("gemini-1.5-flash"));
	}
}
