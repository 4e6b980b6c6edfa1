//! FinLit Advisor Library
//!
//! A small web service that forwards financial-literacy topics and budget
//! figures to a hosted text-generation model and renders the returned text.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

// Core domain types - the most commonly used types
pub use finlit_types::{
	BudgetBreakdown, BudgetRequest, ModelInfo, ProviderError, ProviderResult, ResolvedModel,
	SecretString, TextProvider, GENERATE_CONTENT_METHOD,
};

// Service layer
pub use finlit_service::{AdvisorService, ModelResolver, MODEL_UNAVAILABLE_MESSAGE, SAMPLE_TOPIC};

// Provider layer
pub use finlit_provider::GeminiClient;

// API layer
pub use finlit_api::{create_router, AppState};

// Config
pub use finlit_config::{
	load_config, log_service_info, log_startup_complete, ConfigurableValue, Settings,
};

// Module aliases for direct access to the member crates
pub mod types {
	pub use finlit_types::*;
}

pub mod config {
	pub use finlit_config::*;
}

pub mod provider {
	pub use finlit_provider::*;
}

pub mod service {
	pub use finlit_service::*;
}

pub mod api {
	pub use finlit_api::*;
}

pub mod mocks;

// Re-exported for custom provider implementations
pub use async_trait;

/// Builder pattern for configuring the advisor
///
/// Wires settings into a provider, resolves a model once and hands the
/// resulting services to the web layer as explicit state; nothing is stored
/// in process-wide globals.
pub struct AdvisorBuilder {
	settings: Option<Settings>,
	provider: Option<Arc<dyn TextProvider>>,
}

impl Default for AdvisorBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl AdvisorBuilder {
	/// Create a new advisor builder
	pub fn new() -> Self {
		Self {
			settings: None,
			provider: None,
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Inject a custom provider instead of the Gemini client
	///
	/// Used by tests and demos; when set, the API key is not required.
	pub fn with_provider(mut self, provider: Arc<dyn TextProvider>) -> Self {
		self.provider = Some(provider);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use finlit_config::settings::LogFormat;

		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Resolve a model, build the services and return the router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();

		let provider = match self.provider {
			Some(provider) => provider,
			None => {
				// Missing credential is the one fatal configuration error;
				// it must halt startup rather than degrade
				let api_key = settings.get_api_key_secure().map_err(|e| {
					format!(
						"Failed to resolve provider API key: {}. Please set the GEMINI_API_KEY environment variable.",
						e
					)
				})?;

				Arc::new(GeminiClient::new(
					api_key,
					settings.provider.base_url.clone(),
					settings.provider.request_timeout_ms,
				)?) as Arc<dyn TextProvider>
			},
		};

		// Resolution happens exactly once; an unusable model is a degraded
		// state, not a startup failure
		let advisor_service =
			AdvisorService::initialize(provider, settings.provider.preferred_models.clone()).await;

		match advisor_service.model_name() {
			Some(model) => info!("Successfully initialized with model {}", model),
			None => info!("Initialized without a usable model; responses will degrade"),
		}

		let app_state = AppState {
			advisor_service: Arc::new(advisor_service),
		};

		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	/// This method handles everything needed to run the server, including:
	/// - Loading .env file
	/// - Loading configuration with defaults
	/// - Initializing tracing
	/// - Resolving the model and binding the listener
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let using_provided_settings = self.settings.is_some();
		let settings = if using_provided_settings {
			self.settings.take().unwrap()
		} else {
			load_config().unwrap_or_default()
		};

		self.init_tracing_from_settings(&settings)?;

		log_service_info(&settings);

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);

		// Fail fast on the one required credential before any resolution
		// work begins, unless a custom provider was injected
		if self.provider.is_none() {
			settings.get_api_key_secure().map_err(|e| {
				format!(
					"Fatal configuration error: {}. Set the GEMINI_API_KEY environment variable.",
					e
				)
			})?;
		}

		// Parse bind address
		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		// Ensure we have proper configuration in the builder
		if self.settings.is_none() {
			self.settings = Some(settings.clone());
		}

		let (app, app_state) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("Routes available:");
		info!("  GET       /");
		info!("  GET|POST  /literacy");
		info!("  GET|POST  /budgeting");
		info!("  GET       /health");
		info!("  GET       /diagnostics");
		if let Some(model) = app_state.advisor_service.model_name() {
			info!("🤖 Advisor model: {}", model);
		}

		axum::serve(listener, app).await?;

		Ok(())
	}
}
