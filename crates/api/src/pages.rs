//! HTML page rendering
//!
//! The interface is two small forms and a handful of status pages; markup is
//! built inline and user-supplied or model-generated text is escaped before
//! interpolation.

/// Escape text for safe interpolation into HTML
pub fn escape_html(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(ch),
		}
	}
	escaped
}

/// Wrap page content in the shared layout
fn layout(title: &str, body: &str) -> String {
	format!(
		"<!DOCTYPE html>\n\
		 <html lang=\"en\">\n\
		 <head>\n\
		 <meta charset=\"utf-8\">\n\
		 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
		 <title>{title} | FinLit Advisor</title>\n\
		 </head>\n\
		 <body>\n\
		 <nav><a href=\"/\">Home</a> | <a href=\"/literacy\">Financial Literacy</a> | \
		 <a href=\"/budgeting\">Budgeting</a></nav>\n\
		 {body}\n\
		 </body>\n\
		 </html>\n",
		title = escape_html(title),
		body = body,
	)
}

/// Generated text block, shown below a form after submission
fn result_block(heading: &str, text: &str) -> String {
	format!(
		"<section>\n<h2>{}</h2>\n<pre>{}</pre>\n</section>",
		escape_html(heading),
		escape_html(text),
	)
}

pub fn index_page() -> String {
	layout(
		"Home",
		"<h1>FinLit Advisor</h1>\n\
		 <p>Learn about money and get feedback on your budget.</p>\n\
		 <ul>\n\
		 <li><a href=\"/literacy\">Ask a financial literacy question</a></li>\n\
		 <li><a href=\"/budgeting\">Analyze your monthly budget</a></li>\n\
		 </ul>",
	)
}

pub fn literacy_page(response: Option<&str>) -> String {
	let mut body = String::from(
		"<h1>Financial Literacy</h1>\n\
		 <form method=\"post\" action=\"/literacy\">\n\
		 <label for=\"topic\">What would you like to learn about?</label>\n\
		 <input type=\"text\" id=\"topic\" name=\"topic\" \
		 placeholder=\"e.g. emergency funds, credit scores\">\n\
		 <button type=\"submit\">Get Information</button>\n\
		 </form>",
	);

	if let Some(text) = response {
		body.push('\n');
		body.push_str(&result_block("Response", text));
	}

	layout("Financial Literacy", &body)
}

pub fn budgeting_page(feedback: Option<&str>) -> String {
	let mut body = String::from(
		"<h1>Budget Analysis</h1>\n\
		 <form method=\"post\" action=\"/budgeting\">\n\
		 <label for=\"income\">Monthly income ($)</label>\n\
		 <input type=\"text\" id=\"income\" name=\"income\">\n\
		 <label for=\"needs\">Needs: housing, food, utilities ($)</label>\n\
		 <input type=\"text\" id=\"needs\" name=\"needs\">\n\
		 <label for=\"wants\">Wants: entertainment, dining out ($)</label>\n\
		 <input type=\"text\" id=\"wants\" name=\"wants\">\n\
		 <label for=\"savings_debt\">Savings / debt payment ($)</label>\n\
		 <input type=\"text\" id=\"savings_debt\" name=\"savings_debt\">\n\
		 <button type=\"submit\">Analyze Budget</button>\n\
		 </form>",
	);

	if let Some(text) = feedback {
		body.push('\n');
		body.push_str(&result_block("Feedback", text));
	}

	layout("Budget Analysis", &body)
}

pub fn diagnostics_success_page(model: &str, response: &str) -> String {
	let body = format!(
		"<h1>Diagnostics</h1>\n\
		 <p>Model <strong>{}</strong> answered the sample topic.</p>\n{}",
		escape_html(model),
		result_block("Sample response", response),
	);
	layout("Diagnostics", &body)
}

pub fn diagnostics_failure_page(reason: &str) -> String {
	let body = format!(
		"<h1>Diagnostics</h1>\n<p>Check failed: {}</p>",
		escape_html(reason),
	);
	layout("Diagnostics", &body)
}

pub fn not_found_page() -> String {
	layout(
		"Page Not Found",
		"<h1>Page Not Found</h1>\n<p>Go back to <a href=\"/\">home</a>.</p>",
	)
}
