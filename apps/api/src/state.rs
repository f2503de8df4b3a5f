use std::sync::Arc;

use crate::layout::PageConfig;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Nothing mutable lives here: every render builds its own cursor and page list.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `None` when no API key is configured.
    pub completion: Option<Arc<dyn CompletionService>>,
    /// Base resume text, loaded once at startup.
    pub base_resume: Arc<str>,
    /// Page geometry for every rendered resume (A4, 50pt margins).
    pub page_config: PageConfig,
}
