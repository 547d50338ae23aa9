use crate::config::Config;
use crate::llm_client::GeminiClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. The client is shared read-only across calls; concurrent
/// requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub llm: GeminiClient,
    /// Startup configuration; no handler reads it yet.
    #[allow(dead_code)]
    pub config: Config,
}
