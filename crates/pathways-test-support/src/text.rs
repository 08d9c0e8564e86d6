//! Fake `TextGenerator` implementations for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use pathways_core::error::DomainError;
use pathways_core::generation::{TextGenerator, TextRequest};

/// A text generator that replays a script of results, one per call, and
/// records every request it receives.
///
/// Panics when called more times than it has scripted results.
#[derive(Debug, Default)]
pub struct ScriptedTextGenerator {
    script: Mutex<VecDeque<Result<String, DomainError>>>,
    requests: Mutex<Vec<TextRequest>>,
}

impl ScriptedTextGenerator {
    /// Create a generator that answers with `script` in order.
    #[must_use]
    pub fn new(script: Vec<Result<String, DomainError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a generator whose every scripted call succeeds.
    #[must_use]
    pub fn succeeding(documents: Vec<String>) -> Self {
        Self::new(documents.into_iter().map(Ok).collect())
    }

    /// Returns a snapshot of all received requests.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requests(&self) -> Vec<TextRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedTextGenerator {
    async fn generate(&self, request: &TextRequest) -> Result<String, DomainError> {
        self.requests.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedTextGenerator script exhausted")
    }
}

/// A text generator that always fails with a network error.
#[derive(Debug, Default)]
pub struct FailingTextGenerator {
    calls: Mutex<usize>,
}

impl FailingTextGenerator {
    /// Number of calls received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TextGenerator for FailingTextGenerator {
    async fn generate(&self, _request: &TextRequest) -> Result<String, DomainError> {
        *self.calls.lock().unwrap() += 1;
        Err(DomainError::GenerationNetwork("connection refused".into()))
    }
}
