use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::report::store::ReportStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub reports: ReportStore,
    pub config: Config,
}
