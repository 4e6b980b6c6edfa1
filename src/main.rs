//! FinLit Advisor Server
//!
//! Main entry point for the advisor server

use finlit_advisor::AdvisorBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	AdvisorBuilder::new().start_server().await
}
