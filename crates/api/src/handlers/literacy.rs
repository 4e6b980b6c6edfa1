use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::info;

use crate::pages;
use crate::state::AppState;

/// Topic submission from the literacy form
#[derive(Debug, Deserialize)]
pub struct TopicForm {
	#[serde(default)]
	pub topic: String,
}

/// GET /literacy - empty topic form
pub async fn literacy_form() -> Html<String> {
	Html(pages::literacy_page(None))
}

/// POST /literacy - run the advisor on the submitted topic
pub async fn literacy_submit(
	State(state): State<AppState>,
	Form(form): Form<TopicForm>,
) -> Html<String> {
	info!("Literacy topic received ({} chars)", form.topic.len());

	let response = if form.topic.trim().is_empty() {
		// Rejected here at the web boundary; the advisor itself accepts
		// blank topics
		"Please enter a topic to get information about.".to_string()
	} else {
		state.advisor_service.provide_info(&form.topic).await
	};

	info!("Literacy response ready ({} chars)", response.len());
	Html(pages::literacy_page(Some(&response)))
}
