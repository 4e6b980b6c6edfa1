//! Budget request figures and the derived breakdown

use serde::{Deserialize, Serialize};

/// Raw monthly budget figures submitted by the user
///
/// Four `f64` fields with no range validation; negative values pass through
/// to the arithmetic and the model unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRequest {
	pub income: f64,
	pub needs: f64,
	pub wants: f64,
	pub savings_debt: f64,
}

impl BudgetRequest {
	pub fn new(income: f64, needs: f64, wants: f64, savings_debt: f64) -> Self {
		Self {
			income,
			needs,
			wants,
			savings_debt,
		}
	}
}

/// Metrics derived from a [`BudgetRequest`]
///
/// Computed on construction, never stored on the request. Percentages are
/// each category's share of income, clamped to 0 when income ≤ 0 to avoid
/// division by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetBreakdown {
	pub total_expenses: f64,
	pub remaining: f64,
	pub needs_percent: f64,
	pub wants_percent: f64,
	pub savings_percent: f64,
}

impl BudgetBreakdown {
	pub fn from_request(request: &BudgetRequest) -> Self {
		let total_expenses = request.needs + request.wants + request.savings_debt;
		let remaining = request.income - total_expenses;

		let percent = |amount: f64| -> f64 {
			if request.income > 0.0 {
				amount / request.income * 100.0
			} else {
				0.0
			}
		};

		Self {
			total_expenses,
			remaining,
			needs_percent: percent(request.needs),
			wants_percent: percent(request.wants),
			savings_percent: percent(request.savings_debt),
		}
	}
}
