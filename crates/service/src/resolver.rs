//! Model resolution: ordered preference search with catalog fallback

use std::future::Future;

use finlit_types::{ModelInfo, ResolvedModel, TextProvider};
use tracing::{debug, info, warn};

/// Try candidates in order, suppressing every probe failure
///
/// The pure combinator behind resolution: returns the first candidate whose
/// probe succeeds, or `None` once the list is exhausted. Probe errors are
/// logged at debug level and otherwise swallowed; resolution is best-effort
/// by contract.
pub async fn first_usable<F, Fut, T, E>(candidates: Vec<String>, mut probe: F) -> Option<T>
where
	F: FnMut(String) -> Fut,
	Fut: Future<Output = Result<T, E>>,
	E: std::fmt::Display,
{
	for candidate in candidates {
		match probe(candidate.clone()).await {
			Ok(handle) => return Some(handle),
			Err(e) => {
				debug!("Model candidate '{}' rejected: {}", candidate, e);
				continue;
			},
		}
	}
	None
}

/// Resolves a usable model identifier against a provider
///
/// Resolution runs once, at service construction. The preference list order
/// is significant and fixed by configuration; catalog discovery is only a
/// fallback and respects provider-returned order.
pub struct ModelResolver {
	preferred: Vec<String>,
}

impl ModelResolver {
	pub fn new(preferred: Vec<String>) -> Self {
		Self { preferred }
	}

	/// Find the first usable model, or `None` when nothing is available
	///
	/// Never returns an error: probe failures, catalog-listing failures and
	/// an empty catalog all collapse into the "unavailable" state.
	pub async fn resolve(&self, provider: &dyn TextProvider) -> Option<ResolvedModel> {
		if let Some(info) = first_usable(self.preferred.clone(), |name| async move {
			provider.probe_model(&name).await
		})
		.await
		{
			info!("Resolved preferred model {}", info.name);
			return Some(ResolvedModel::from(info));
		}

		debug!("No preferred model usable, falling back to catalog discovery");

		let catalog = match provider.list_models().await {
			Ok(models) => models,
			Err(e) => {
				warn!("Model catalog listing failed: {}", e);
				return None;
			},
		};

		let candidates: Vec<String> = catalog
			.into_iter()
			.filter(ModelInfo::supports_generation)
			.map(|model| model.name)
			.collect();

		if candidates.is_empty() {
			warn!("Model catalog contains no text-generation models");
			return None;
		}

		let resolved = first_usable(candidates, |name| async move {
			provider.probe_model(&name).await
		})
		.await
		.map(ResolvedModel::from);

		match &resolved {
			Some(model) => info!("Resolved model {} via catalog discovery", model.name()),
			None => warn!("No usable model: preference list and catalog discovery exhausted"),
		}

		resolved
	}
}
