use quiz_core::engine::{AttemptEngine, AttemptEvent, AttemptPhase, Effect};
use quiz_core::model::{OptionKey, Question, QuestionId};
use quiz_core::scorer::AttemptResult;

/// View-facing wrapper around one attempt engine.
///
/// Views read snapshots through the accessors and feed every user and
/// host event through `dispatch`; the returned effects are the host's
/// to run (timer, fullscreen).
pub struct AttemptVm {
    engine: AttemptEngine,
}

impl AttemptVm {
    #[must_use]
    pub fn new(engine: AttemptEngine) -> Self {
        Self { engine }
    }

    #[must_use]
    pub fn start_effects(&self) -> Vec<Effect> {
        self.engine.start_effects()
    }

    pub fn dispatch(&mut self, event: AttemptEvent) -> Vec<Effect> {
        self.engine.apply(event)
    }

    #[must_use]
    pub fn phase(&self) -> AttemptPhase {
        self.engine.phase()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.engine.document().title()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.engine.document().question_count()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.engine.current_index()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.engine.current_question()
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.engine.remaining_seconds()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.engine.answered_count()
    }

    #[must_use]
    pub fn selected(&self, question_id: &QuestionId) -> Option<OptionKey> {
        self.engine.selected(question_id)
    }

    #[must_use]
    pub fn result(&self) -> Option<&AttemptResult> {
        self.engine.result()
    }
}

/// `MM:SS` countdown label.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes:02}:{remainder:02}")
}

/// One-line verdict shown on the completion screen.
#[must_use]
pub fn performance_message(percentage: u32) -> &'static str {
    match percentage {
        80.. => "Excellent work! You have a strong grasp of this material.",
        70..=79 => "Great job! You are close to mastering this test.",
        60..=69 => "Good effort. A bit more practice will get you there.",
        40..=59 => "Keep practicing. The detailed results show where to focus.",
        _ => "This one needs more review. Go through the material and retake the test.",
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
