use axum::{http::StatusCode, response::Html};

use crate::pages;

/// Fallback for unmatched routes
pub async fn not_found() -> (StatusCode, Html<String>) {
	(StatusCode::NOT_FOUND, Html(pages::not_found_page()))
}
