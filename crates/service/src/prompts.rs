//! Prompt templates sent to the model

use finlit_types::{BudgetBreakdown, BudgetRequest};

/// Fixed sample topic used by the diagnostics endpoint
pub const SAMPLE_TOPIC: &str = "How should a student manage money?";

/// Literacy prompt: fixed framing around a free-text topic
///
/// The template pins the assistant to financial-literacy ground: word budget,
/// plain language, practical examples, and a polite redirect when the topic
/// is off-domain. Empty topics are embedded as-is.
pub fn literacy_prompt(topic: &str) -> String {
	format!(
		"You are a helpful financial literacy assistant. Please provide clear, practical, \
		 and educational information about: {topic}\n\
		 \n\
		 Guidelines:\n\
		 - Keep the response concise but informative (200-400 words)\n\
		 - Use simple language that's easy to understand\n\
		 - Include practical tips and examples when relevant\n\
		 - Focus on actionable advice\n\
		 - If the topic is too broad, provide an overview with key points\n\
		 - If the topic isn't related to financial literacy, politely redirect to financial topics\n\
		 \n\
		 Topic: {topic}"
	)
}

/// Budget prompt: formatted figures plus the derived percentages
pub fn budget_prompt(request: &BudgetRequest, breakdown: &BudgetBreakdown) -> String {
	format!(
		"Analyze this budget and provide personalized financial advice:\n\
		 \n\
		 Monthly Income: ${income}\n\
		 Needs (housing, food, utilities, etc.): ${needs} ({needs_pct:.1}%)\n\
		 Wants (entertainment, dining out, etc.): ${wants} ({wants_pct:.1}%)\n\
		 Savings/Debt Payment: ${savings} ({savings_pct:.1}%)\n\
		 \n\
		 Remaining Money: ${remaining}\n\
		 \n\
		 Please provide:\n\
		 1. An assessment of this budget allocation\n\
		 2. Specific recommendations for improvement\n\
		 3. Whether this follows the 50/30/20 rule (50% needs, 30% wants, 20% savings)\n\
		 4. Actionable tips for better financial management\n\
		 \n\
		 Keep the response practical and encouraging, around 250-350 words.",
		income = format_usd(request.income),
		needs = format_usd(request.needs),
		needs_pct = breakdown.needs_percent,
		wants = format_usd(request.wants),
		wants_pct = breakdown.wants_percent,
		savings = format_usd(request.savings_debt),
		savings_pct = breakdown.savings_percent,
		remaining = format_usd(breakdown.remaining),
	)
}

/// Format a dollar amount with thousands separators and two decimals
pub fn format_usd(amount: f64) -> String {
	let negative = amount.is_sign_negative() && amount != 0.0;
	let rounded = format!("{:.2}", amount.abs());
	let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

	let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
	for (i, digit) in int_part.chars().rev().enumerate() {
		if i > 0 && i % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(digit);
	}
	let int_grouped: String = grouped.chars().rev().collect();

	format!(
		"{}{}.{}",
		if negative { "-" } else { "" },
		int_grouped,
		frac_part
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_format_usd_groups_thousands() {
		assert_eq!(format_usd(5000.0), "5,000.00");
		assert_eq!(format_usd(1234567.89), "1,234,567.89");
		assert_eq!(format_usd(999.5), "999.50");
		assert_eq!(format_usd(0.0), "0.00");
	}

	#[test]
	fn test_format_usd_negative_amounts() {
		assert_eq!(format_usd(-1100.0), "-1,100.00");
		assert_eq!(format_usd(-0.25), "-0.25");
	}

	#[test]
	fn test_literacy_prompt_embeds_topic_and_framing() {
		let prompt = literacy_prompt("emergency fund");

		assert!(prompt.contains("Topic: emergency fund"));
		assert!(prompt.contains("financial literacy assistant"));
		assert!(prompt.contains("200-400 words"));
		assert!(prompt.contains("politely redirect"));
	}

	#[test]
	fn test_literacy_prompt_accepts_empty_topic() {
		let prompt = literacy_prompt("");
		assert!(prompt.contains("Topic: "));
		assert!(!prompt.is_empty());
	}

	#[test]
	fn test_budget_prompt_embeds_figures_and_percentages() {
		let request = BudgetRequest::new(5000.0, 2500.0, 1500.0, 1000.0);
		let breakdown = BudgetBreakdown::from_request(&request);
		let prompt = budget_prompt(&request, &breakdown);

		assert!(prompt.contains("Monthly Income: $5,000.00"));
		assert!(prompt.contains("$2,500.00 (50.0%)"));
		assert!(prompt.contains("$1,500.00 (30.0%)"));
		assert!(prompt.contains("$1,000.00 (20.0%)"));
		assert!(prompt.contains("Remaining Money: $0.00"));
		assert!(prompt.contains("50/30/20 rule"));
		assert!(prompt.contains("250-350 words"));
	}

	#[test]
	fn test_budget_prompt_with_zero_income_shows_zero_percentages() {
		let request = BudgetRequest::new(0.0, 800.0, 200.0, 100.0);
		let breakdown = BudgetBreakdown::from_request(&request);
		let prompt = budget_prompt(&request, &breakdown);

		assert!(prompt.contains("$800.00 (0.0%)"));
		assert!(prompt.contains("Remaining Money: $-1,100.00"));
	}
}
