use axum::{extract::State, response::Html, Form};
use finlit_types::BudgetRequest;
use serde::Deserialize;
use std::num::ParseFloatError;
use tracing::{info, warn};

use crate::pages;
use crate::state::AppState;

/// Validation message shown for non-numeric budget fields
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numerical values for all fields.";

/// Raw budget submission; fields arrive as text and are parsed here so bad
/// input never reaches the advisor
#[derive(Debug, Deserialize)]
pub struct BudgetForm {
	#[serde(default)]
	pub income: String,
	#[serde(default)]
	pub needs: String,
	#[serde(default)]
	pub wants: String,
	#[serde(default)]
	pub savings_debt: String,
}

impl BudgetForm {
	/// Parse all four fields; missing/blank fields default to 0
	fn parse(&self) -> Result<BudgetRequest, ParseFloatError> {
		Ok(BudgetRequest::new(
			parse_field(&self.income)?,
			parse_field(&self.needs)?,
			parse_field(&self.wants)?,
			parse_field(&self.savings_debt)?,
		))
	}
}

fn parse_field(raw: &str) -> Result<f64, ParseFloatError> {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		Ok(0.0)
	} else {
		trimmed.parse()
	}
}

/// GET /budgeting - empty budget form
pub async fn budgeting_form() -> Html<String> {
	Html(pages::budgeting_page(None))
}

/// POST /budgeting - parse the figures and run the budget analysis
pub async fn budgeting_submit(
	State(state): State<AppState>,
	Form(form): Form<BudgetForm>,
) -> Html<String> {
	let feedback = match form.parse() {
		Ok(request) => {
			info!(
				"Budget received: income={:.2}, needs={:.2}, wants={:.2}, savings_debt={:.2}",
				request.income, request.needs, request.wants, request.savings_debt
			);
			state.advisor_service.analyze_and_suggest(&request).await
		},
		Err(e) => {
			warn!("Budget form rejected: {}", e);
			INVALID_INPUT_MESSAGE.to_string()
		},
	};

	Html(pages::budgeting_page(Some(&feedback)))
}
