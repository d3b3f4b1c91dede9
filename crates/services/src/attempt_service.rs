use std::sync::Arc;

use tracing::debug;

use quiz_core::engine::AttemptEngine;
use quiz_core::model::TestId;
use quiz_core::time::Clock;

use crate::content::TestContentProvider;
use crate::error::AttemptError;

/// Orchestrates attempt start: one fetch, one engine.
///
/// Mirrors the session lifecycle: the fetch is the Loading state, a
/// successful fetch constructs the engine already Active, and both
/// fetch failures and empty tests surface as errors before any engine
/// exists.
#[derive(Clone)]
pub struct AttemptService {
    clock: Clock,
    content: Arc<dyn TestContentProvider>,
}

impl AttemptService {
    #[must_use]
    pub fn new(clock: Clock, content: Arc<dyn TestContentProvider>) -> Self {
        Self { clock, content }
    }

    /// Fetch the test document and start an attempt over it.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError` when the fetch fails or the document is
    /// unusable (empty, malformed keys, zero duration).
    pub async fn start_attempt(&self, test_id: &TestId) -> Result<AttemptEngine, AttemptError> {
        let document = self.content.fetch_test_by_id(test_id).await?;
        debug!(
            test_id = %document.id(),
            questions = document.question_count(),
            duration = document.duration_seconds(),
            "starting attempt"
        );
        Ok(AttemptEngine::new(document, self.clock))
    }

    #[must_use]
    pub fn content(&self) -> Arc<dyn TestContentProvider> {
        Arc::clone(&self.content)
    }
}
