use std::sync::Arc;

use crate::llm_client::AnalysisClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The analysis backend. `GeminiClient` in production, a stub in tests.
    pub analysis: Arc<dyn AnalysisClient>,
}
