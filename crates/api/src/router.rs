use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
	catch_panic::CatchPanicLayer,
	compression::CompressionLayer,
	cors::CorsLayer,
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};
use tracing::Level;

use crate::handlers::{
	budgeting_form, budgeting_submit, diagnostics, health, index, literacy_form, literacy_submit,
	not_found,
};
use crate::security::add_security_headers;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
	// Layers prepared first so they're in scope for all route groups
	let cors = CorsLayer::permissive();
	// Form posts are tiny; anything bigger than this is not a budget
	let body_limit = RequestBodyLimitLayer::new(64 * 1024);
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	let router = Router::new()
		.route("/", get(index))
		.route("/literacy", get(literacy_form).post(literacy_submit))
		.route("/budgeting", get(budgeting_form).post(budgeting_submit))
		.route("/health", get(health))
		.route("/diagnostics", get(diagnostics))
		.fallback(not_found);

	// Apply common layers; catch-panic is outermost so an unwinding handler
	// still turns into a plain 500 response
	let router = router
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id)
		.layer(body_limit)
		.layer(CatchPanicLayer::new());

	add_security_headers(router)
}
