//! Configuration settings structures

use crate::configurable_value::{ConfigurableValue, ConfigurableValueError};
use finlit_types::SecretString;
use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
	pub server: ServerSettings,
	pub provider: ProviderSettings,
	pub security: SecuritySettings,
	pub environment: EnvironmentSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Text-generation provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderSettings {
	/// Provider API key
	///
	/// Required; startup fails when it cannot be resolved.
	/// Example configurations:
	/// - Environment variable: `{"type": "env", "value": "GEMINI_API_KEY"}`
	/// - Plain value: `{"type": "plain", "value": "your-key-here"}`
	pub api_key: ConfigurableValue,
	/// Base URL of the provider REST API
	pub base_url: String,
	/// Ordered list of model identifiers to try during resolution.
	/// Order is significant and fixed by this configuration, not computed.
	pub preferred_models: Vec<String>,
	/// Request timeout for HTTP calls to the provider
	pub request_timeout_ms: u64,
}

/// Security configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SecuritySettings {
	/// Optional session secret, kept for the web layer.
	///
	/// Unlike the API key its absence is not an error.
	pub session_secret: ConfigurableValue,
}

/// Environment-specific settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EnvironmentSettings {
	pub profile: EnvironmentProfile,
	pub debug: bool,
}

/// Environment profiles
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	Development,
	Staging,
	Production,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			server: ServerSettings {
				host: "127.0.0.1".to_string(),
				port: 5000,
			},
			provider: ProviderSettings {
				api_key: ConfigurableValue::from_env("GEMINI_API_KEY"),
				base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
				preferred_models: vec![
					"gemini-1.5-flash".to_string(),
					"gemini-1.5-pro".to_string(),
					"models/gemini-1.5-flash".to_string(),
					"models/gemini-1.5-pro".to_string(),
				],
				request_timeout_ms: 60_000,
			},
			security: SecuritySettings {
				session_secret: ConfigurableValue::from_env("SECRET_KEY"),
			},
			environment: EnvironmentSettings {
				profile: EnvironmentProfile::Development,
				debug: true,
			},
			logging: LoggingSettings {
				level: "info".to_string(),
				format: LogFormat::Pretty,
				structured: false,
			},
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Check if running in production
	pub fn is_production(&self) -> bool {
		self.environment.profile == EnvironmentProfile::Production
	}

	/// Check if debug mode is enabled
	pub fn is_debug(&self) -> bool {
		self.environment.debug && !self.is_production()
	}

	/// Resolve the provider API key for secure handling
	///
	/// This is the one required credential: resolution failure here is a
	/// fatal configuration error and must halt startup.
	pub fn get_api_key_secure(&self) -> Result<SecretString, ConfigurableValueError> {
		self.provider.api_key.resolve_for_secret()
	}

	/// Resolve the optional session secret
	///
	/// Absence is fine; the web layer falls back to running without one.
	pub fn session_secret(&self) -> Option<SecretString> {
		self.security.session_secret.resolve_for_secret().ok()
	}
}
