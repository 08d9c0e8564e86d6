//! Shared application state.

use std::sync::Arc;

use pathways_conversation::application::dispatcher::StageDispatcher;
use pathways_conversation::application::registry::SessionRegistry;
use pathways_core::clock::Clock;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock used to stamp session activity.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Registry of live conversation sessions.
    pub registry: Arc<SessionRegistry>,
    /// Runs conversation turns against the generative collaborators.
    pub dispatcher: Arc<StageDispatcher>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        registry: Arc<SessionRegistry>,
        dispatcher: Arc<StageDispatcher>,
    ) -> Self {
        Self {
            clock,
            registry,
            dispatcher,
        }
    }
}
