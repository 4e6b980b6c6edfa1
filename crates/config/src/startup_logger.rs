//! Service startup logging for the FinLit Advisor
//!
//! Logs service, environment and configuration information when the server
//! boots, mirroring what an operator needs to confirm a healthy start.

use crate::Settings;
use std::env;
use tracing::info;

/// Logs comprehensive service information at startup
pub fn log_service_info(settings: &Settings) {
	let service_name = "finlit-advisor";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== FinLit Advisor Service Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);

	info!("💻 Platform: {}", env::consts::OS);
	info!("🏗️ Architecture: {}", env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	// Report credential presence without touching the values themselves
	info!(
		"🔑 API key: {} ({})",
		if settings.get_api_key_secure().is_ok() {
			"present"
		} else {
			"MISSING"
		},
		settings.provider.api_key.description()
	);
	info!(
		"🔐 Session secret: {}",
		if settings.session_secret().is_some() {
			"configured"
		} else {
			"not set (running without one)"
		}
	);

	info!(
		"🤖 Preferred models: {}",
		settings.provider.preferred_models.join(", ")
	);

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);

	info!("🎯 Starting advisor initialization...");
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 FinLit Advisor Service Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs additional startup completion information
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ FinLit Advisor Service Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept requests");
}
