use std::sync::Arc;

use crate::credits::CreditLedger;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Selected at startup via AI_PROVIDER.
    pub provider: Arc<dyn CompletionProvider>,
    /// Capability gate for paid AI calls. The pure analysis path never
    /// consults it.
    pub credits: Arc<CreditLedger>,
}
