use axum::response::Html;

use crate::pages;

/// GET / - home page linking the two tools
pub async fn index() -> Html<String> {
	Html(pages::index_page())
}
