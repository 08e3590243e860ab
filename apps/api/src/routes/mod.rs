pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::auth::handlers as auth;
use crate::report::handlers as report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Credential validation
        .route("/api/auth/validate-key", post(auth::handle_validate_key))
        // Profile analysis fan-out
        .route("/api/instagram/analyze", post(analysis::handle_analyze))
        // Report generation and retrieval
        .route("/api/report/generate", post(report::handle_generate_report))
        .route("/api/report/view/:report_id", get(report::handle_view_report))
        .route(
            "/api/report/export/:report_id/pdf",
            get(report::handle_export_pdf),
        )
        .with_state(state)
}
