use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The model client is carried as `Arc<dyn ModelClient>` so tests can
/// substitute a deterministic stub without touching handler code.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn ModelClient>,
    pub config: Config,
}
