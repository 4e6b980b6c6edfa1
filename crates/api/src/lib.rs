//! FinLit API
//!
//! Axum-based web layer for the FinLit Advisor: routes, HTML pages and
//! middleware.

pub mod handlers;
pub mod pages;
pub mod router;
pub mod security;
pub mod state;

pub use router::create_router;
pub use state::AppState;
