use std::sync::Arc;

use services::{AttemptService, Identity, TestContentProvider};

/// Capabilities the hosting application hands to the UI.
pub trait UiApp: Send + Sync {
    fn attempts(&self) -> Arc<AttemptService>;
    fn identity(&self) -> Arc<dyn Identity>;
}

#[derive(Clone)]
pub struct AppContext {
    attempts: Arc<AttemptService>,
    identity: Arc<dyn Identity>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            attempts: app.attempts(),
            identity: app.identity(),
        }
    }

    #[must_use]
    pub fn attempts(&self) -> Arc<AttemptService> {
        Arc::clone(&self.attempts)
    }

    #[must_use]
    pub fn identity(&self) -> Arc<dyn Identity> {
        Arc::clone(&self.identity)
    }

    #[must_use]
    pub fn content(&self) -> Arc<dyn TestContentProvider> {
        self.attempts.content()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
