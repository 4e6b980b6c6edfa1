use axum::{extract::State, response::Html};
use finlit_service::SAMPLE_TOPIC;
use tracing::info;

use crate::pages;
use crate::state::AppState;

/// GET /diagnostics - end-to-end check against the resolved model
///
/// Runs the literacy operation with a fixed sample topic and reports the
/// outcome, so a deployment can be verified without typing into the forms.
pub async fn diagnostics(State(state): State<AppState>) -> Html<String> {
	info!("Running model diagnostics");

	let Some(model) = state.advisor_service.model_name() else {
		return Html(pages::diagnostics_failure_page("AI model not available"));
	};
	let model = model.to_string();

	let response = state.advisor_service.provide_info(SAMPLE_TOPIC).await;
	Html(pages::diagnostics_success_page(&model, &response))
}
