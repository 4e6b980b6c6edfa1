//! Error types for provider operations

use thiserror::Error;

/// Errors surfaced by a text-generation provider
///
/// Every transport or protocol failure is converted into one of these at the
/// provider boundary; callers above the boundary never see a raw HTTP error.
#[derive(Error, Debug)]
pub enum ProviderError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	HttpStatus { status_code: u16, reason: String },

	#[error("Model not found: {model}")]
	ModelNotFound { model: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("Model '{model}' returned no text")]
	EmptyCompletion { model: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("Configuration error: {reason}")]
	Config { reason: String },
}

pub type ProviderResult<T> = Result<T, ProviderError>;

impl ProviderError {
	/// Extract the HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			ProviderError::HttpStatus { status_code, .. } => Some(*status_code),
			ProviderError::Http(reqwest_error) => {
				reqwest_error.status().map(|status| status.as_u16())
			},
			_ => None,
		}
	}

	/// Create an HTTP failure error with the given status code and reason
	pub fn http_failure(status_code: u16, reason: impl Into<String>) -> Self {
		Self::HttpStatus {
			status_code,
			reason: reason.into(),
		}
	}

	/// Create an HTTP failure error from a response status with a default reason
	pub fn from_http_failure(status_code: u16) -> Self {
		let reason = match status_code {
			400 => "Bad Request".to_string(),
			401 => "Unauthorized".to_string(),
			403 => "Forbidden".to_string(),
			404 => "Not Found".to_string(),
			408 => "Request Timeout".to_string(),
			429 => "Too Many Requests".to_string(),
			500 => "Internal Server Error".to_string(),
			502 => "Bad Gateway".to_string(),
			503 => "Service Unavailable".to_string(),
			504 => "Gateway Timeout".to_string(),
			_ => format!("HTTP Error {}", status_code),
		};

		Self::HttpStatus {
			status_code,
			reason,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_code_extraction() {
		let error = ProviderError::HttpStatus {
			status_code: 404,
			reason: "Not Found".to_string(),
		};
		assert_eq!(error.status_code(), Some(404));

		let error = ProviderError::http_failure(500, "Internal Server Error");
		assert_eq!(error.status_code(), Some(500));

		let error = ProviderError::from_http_failure(429);
		assert_eq!(error.status_code(), Some(429));

		let error = ProviderError::InvalidResponse {
			reason: "Bad response".to_string(),
		};
		assert_eq!(error.status_code(), None);
	}

	#[test]
	fn test_http_failure_status_message_mapping() {
		let error = ProviderError::from_http_failure(404);
		assert!(error.to_string().contains("404"));
		assert!(error.to_string().contains("Not Found"));

		let error = ProviderError::from_http_failure(429);
		assert!(error.to_string().contains("429"));
		assert!(error.to_string().contains("Too Many Requests"));

		let error = ProviderError::from_http_failure(418);
		assert!(error.to_string().contains("HTTP Error 418"));
	}

	#[test]
	fn test_error_messages_embed_model_name() {
		let error = ProviderError::ModelNotFound {
			model: "models/gemini-1.5-flash".to_string(),
		};
		assert!(error.to_string().contains("models/gemini-1.5-flash"));

		let error = ProviderError::EmptyCompletion {
			model: "models/gemini-1.5-pro".to_string(),
		};
		assert!(error.to_string().contains("models/gemini-1.5-pro"));
	}
}
