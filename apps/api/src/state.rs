use std::sync::Arc;

use crate::candidate::store::CandidateStore;
use crate::llm_client::Completer;

/// Shared application state injected into the handlers of both front ends.
/// Holds no per-request or per-session data.
#[derive(Clone)]
pub struct AppState {
    /// Completion oracle. Default: the Groq-backed `LlmClient`.
    pub completer: Arc<dyn Completer>,
    /// Candidate document store. Default: `PgCandidateStore`.
    pub store: Arc<dyn CandidateStore>,
}
