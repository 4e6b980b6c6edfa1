//! Tests for the web layer routes

use axum::{
	body::Body,
	http::{Request, StatusCode},
	Router,
};
use std::sync::Arc;
use tower::ServiceExt;

use finlit_advisor::api::handlers::budgeting::INVALID_INPUT_MESSAGE;
use finlit_advisor::mocks::{MockProvider, MOCK_REPLY};
use finlit_advisor::{AdvisorService, AppState, MODEL_UNAVAILABLE_MESSAGE};

/// Create application state backed by the given mock provider
async fn state_with(provider: MockProvider) -> AppState {
	let advisor_service = AdvisorService::initialize(
		Arc::new(provider),
		vec!["gemini-1.5-flash".to_string(), "gemini-1.5-pro".to_string()],
	)
	.await;

	AppState {
		advisor_service: Arc::new(advisor_service),
	}
}

async fn router_with(provider: MockProvider) -> Router {
	finlit_advisor::create_router().with_state(state_with(provider).await)
}

async fn test_router() -> Router {
	router_with(MockProvider::new()).await
}

fn get(uri: &str) -> Request<Body> {
	Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
	Request::builder()
		.method("POST")
		.uri(uri)
		.header("content-type", "application/x-www-form-urlencoded")
		.body(Body::from(body.to_string()))
		.unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
	let response = test_router().await.oneshot(get("/health")).await.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn test_index_page_links_both_tools() {
	let response = test_router().await.oneshot(get("/")).await.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_text(response).await;
	assert!(body.contains("FinLit Advisor"));
	assert!(body.contains("/literacy"));
	assert!(body.contains("/budgeting"));
}

#[tokio::test]
async fn test_literacy_get_shows_empty_form() {
	let response = test_router().await.oneshot(get("/literacy")).await.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_text(response).await;
	assert!(body.contains("name=\"topic\""));
	assert!(!body.contains("<h2>Response</h2>"));
}

#[tokio::test]
async fn test_literacy_post_returns_generated_text() {
	let response = test_router()
		.await
		.oneshot(post_form("/literacy", "topic=emergency+funds"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_text(response).await;
	assert!(body.contains(MOCK_REPLY));
}

#[tokio::test]
async fn test_literacy_post_empty_topic_prompts_for_input() {
	let response = test_router()
		.await
		.oneshot(post_form("/literacy", "topic="))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_text(response).await;
	assert!(body.contains("Please enter a topic"));
	assert!(!body.contains(MOCK_REPLY));
}

#[tokio::test]
async fn test_literacy_post_with_unavailable_model_degrades() {
	let response = router_with(MockProvider::unavailable())
		.await
		.oneshot(post_form("/literacy", "topic=credit+scores"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_text(response).await;
	assert!(body.contains(MODEL_UNAVAILABLE_MESSAGE));
}

#[tokio::test]
async fn test_literacy_post_generation_failure_is_reported_as_text() {
	let response = router_with(MockProvider::new().with_failing_generation())
		.await
		.oneshot(post_form("/literacy", "topic=investing"))
		.await
		.unwrap();

	// Failure degrades to a descriptive page, never an error status
	assert_eq!(response.status(), StatusCode::OK);
	let body = body_text(response).await;
	assert!(body.contains("Sorry, I encountered an error"));
	assert!(body.contains("429"));
}

#[tokio::test]
async fn test_budgeting_get_shows_all_fields() {
	let response = test_router()
		.await
		.oneshot(get("/budgeting"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_text(response).await;
	for field in ["income", "needs", "wants", "savings_debt"] {
		assert!(body.contains(&format!("name=\"{}\"", field)));
	}
}

#[tokio::test]
async fn test_budgeting_post_returns_feedback() {
	let response = test_router()
		.await
		.oneshot(post_form(
			"/budgeting",
			"income=5000&needs=2500&wants=1500&savings_debt=1000",
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_text(response).await;
	assert!(body.contains(MOCK_REPLY));
}

#[tokio::test]
async fn test_budgeting_post_rejects_non_numeric_input() {
	let response = test_router()
		.await
		.oneshot(post_form(
			"/budgeting",
			"income=lots&needs=2500&wants=1500&savings_debt=1000",
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_text(response).await;
	assert!(body.contains(INVALID_INPUT_MESSAGE));
	assert!(!body.contains(MOCK_REPLY));
}

#[tokio::test]
async fn test_budgeting_post_missing_fields_default_to_zero() {
	let response = test_router()
		.await
		.oneshot(post_form("/budgeting", "income=100"))
		.await
		.unwrap();

	// Missing fields are zeros, not validation errors
	assert_eq!(response.status(), StatusCode::OK);
	let body = body_text(response).await;
	assert!(body.contains(MOCK_REPLY));
}

#[tokio::test]
async fn test_unknown_route_yields_not_found_page() {
	let response = test_router()
		.await
		.oneshot(get("/no-such-page"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	let body = body_text(response).await;
	assert!(body.contains("Page Not Found"));
	assert!(body.contains("href=\"/\""));
}

#[tokio::test]
async fn test_diagnostics_reports_model_and_sample_response() {
	let response = test_router()
		.await
		.oneshot(get("/diagnostics"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_text(response).await;
	assert!(body.contains("models/gemini-1.5-flash"));
	assert!(body.contains(MOCK_REPLY));
}

#[tokio::test]
async fn test_diagnostics_reports_failure_without_model() {
	let response = router_with(MockProvider::unavailable())
		.await
		.oneshot(get("/diagnostics"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_text(response).await;
	assert!(body.contains("Check failed"));
}

#[tokio::test]
async fn test_security_headers_present() {
	let response = test_router().await.oneshot(get("/")).await.unwrap();

	let headers = response.headers();
	assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
	assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
}
