use std::sync::atomic::{AtomicBool, Ordering};

use dioxus::document::eval;

use services::ExclusiveModeGuard;

use super::scripts;

/// Fullscreen implementation of the exclusive-mode guard, bound to the
/// attempt root container.
///
/// Browsers may reject a fullscreen request that is not tied to a user
/// gesture, so the first enter retries once shortly after mount. A
/// rejected request is logged on the console and otherwise ignored; the
/// attempt simply runs unguarded.
#[derive(Debug, Default)]
pub(crate) struct FullscreenGuard {
    entered_once: AtomicBool,
}

impl ExclusiveModeGuard for FullscreenGuard {
    fn enter(&self) {
        let retry_once = !self.entered_once.swap(true, Ordering::AcqRel);
        let _ = eval(&scripts::enter_exclusive_script(retry_once));
    }

    fn exit(&self) {
        let _ = eval(scripts::EXIT_EXCLUSIVE_SCRIPT);
    }
}
