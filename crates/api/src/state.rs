use std::sync::Arc;

use finlit_service::AdvisorService;

/// Application state shared across handlers
///
/// The advisor holds the one resolved-model handle; cloning the state just
/// bumps the reference count.
#[derive(Clone)]
pub struct AppState {
	pub advisor_service: Arc<AdvisorService>,
}
