use chrono::{DateTime, Utc};
use std::fmt;

use crate::ledger::AnswerLedger;
use crate::model::{OptionKey, Question, QuestionId, TestDocument};
use crate::scorer::{AttemptResult, score};
use crate::time::Clock;

//
// ─── EVENTS AND EFFECTS ────────────────────────────────────────────────────────
//

/// Everything that can happen to a running attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptEvent {
    /// One second of the countdown elapsed.
    Tick,
    /// The countdown reached zero.
    Expired,
    /// The user asked to submit.
    Submit,
    /// Exclusive presentation mode ended while the attempt was running.
    GuardExited,
    /// The user chose an option for a question.
    Select {
        question_id: QuestionId,
        key: OptionKey,
    },
    /// Move to the next question.
    Next,
    /// Move to the previous question.
    Previous,
    /// Open the detailed result review.
    OpenReview,
    /// Close the detailed result review.
    CloseReview,
    /// Throw away the ledger and run the same test again.
    Restart,
}

/// Side effects the host must carry out after a transition.
///
/// The engine never touches timers or the presentation surface itself;
/// it only says what should happen to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    StartTimer { duration_seconds: u32 },
    StopTimer,
    EnterExclusive,
    ExitExclusive,
}

/// Where an attempt currently is in its lifecycle.
///
/// Loading and load failure are host concerns: an engine only exists
/// once a document has loaded, so construction is the Loading → Active
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPhase {
    Active {
        current_index: usize,
        remaining_seconds: u32,
    },
    Completed,
    Reviewing,
}

impl AttemptPhase {
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, AttemptPhase::Active { .. })
    }
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// State machine for a single timed test attempt.
///
/// Owns the document, the answer ledger and the phase, and advances
/// through `apply`. All three completion triggers (expiry, manual
/// submit, guard exit) converge on one completion path; whichever
/// arrives first wins and the rest are no-ops, because every transition
/// checks the current phase before doing anything.
pub struct AttemptEngine {
    document: TestDocument,
    ledger: AnswerLedger,
    phase: AttemptPhase,
    result: Option<AttemptResult>,
    clock: Clock,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl AttemptEngine {
    /// Start an attempt over a loaded document.
    ///
    /// The document is already validated (non-empty, positive duration),
    /// so this cannot fail; callers surface load and validation failures
    /// before an engine exists.
    #[must_use]
    pub fn new(document: TestDocument, clock: Clock) -> Self {
        let phase = AttemptPhase::Active {
            current_index: 0,
            remaining_seconds: document.duration_seconds(),
        };
        let started_at = clock.now();
        Self {
            document,
            ledger: AnswerLedger::new(),
            phase,
            result: None,
            clock,
            started_at,
            completed_at: None,
        }
    }

    /// Effects the host must run when the attempt first becomes active.
    #[must_use]
    pub fn start_effects(&self) -> Vec<Effect> {
        vec![
            Effect::StartTimer {
                duration_seconds: self.document.duration_seconds(),
            },
            Effect::EnterExclusive,
        ]
    }

    /// The single transition function: applies an event to the current
    /// phase and returns the effects the host must carry out.
    ///
    /// Events that make no sense in the current phase are silently
    /// dropped; that is what makes near-simultaneous completion
    /// triggers and out-of-range navigation safe.
    pub fn apply(&mut self, event: AttemptEvent) -> Vec<Effect> {
        match event {
            AttemptEvent::Tick => {
                if let AttemptPhase::Active {
                    remaining_seconds, ..
                } = &mut self.phase
                {
                    *remaining_seconds = remaining_seconds.saturating_sub(1);
                }
                Vec::new()
            }
            AttemptEvent::Expired | AttemptEvent::Submit | AttemptEvent::GuardExited => {
                self.complete()
            }
            AttemptEvent::Select { question_id, key } => {
                if self.phase.is_active() && self.document.contains(&question_id) {
                    self.ledger.select(question_id, key);
                }
                Vec::new()
            }
            AttemptEvent::Next => {
                if let AttemptPhase::Active { current_index, .. } = &mut self.phase
                    && *current_index + 1 < self.document.question_count()
                {
                    *current_index += 1;
                }
                Vec::new()
            }
            AttemptEvent::Previous => {
                if let AttemptPhase::Active { current_index, .. } = &mut self.phase
                    && *current_index > 0
                {
                    *current_index -= 1;
                }
                Vec::new()
            }
            AttemptEvent::OpenReview => {
                if self.phase == AttemptPhase::Completed {
                    self.phase = AttemptPhase::Reviewing;
                }
                Vec::new()
            }
            AttemptEvent::CloseReview => {
                if self.phase == AttemptPhase::Reviewing {
                    self.phase = AttemptPhase::Completed;
                }
                Vec::new()
            }
            AttemptEvent::Restart => self.restart(),
        }
    }

    /// Convergent Active → Completed transition.
    ///
    /// Stopping the timer and exiting exclusive mode are always
    /// requested together, no matter which trigger fired, so neither a
    /// running timer nor a stuck fullscreen request can leak.
    fn complete(&mut self) -> Vec<Effect> {
        if !self.phase.is_active() {
            return Vec::new();
        }
        self.result = Some(score(&self.document, &self.ledger));
        self.completed_at = Some(self.clock.now());
        self.phase = AttemptPhase::Completed;
        vec![Effect::StopTimer, Effect::ExitExclusive]
    }

    fn restart(&mut self) -> Vec<Effect> {
        if self.phase.is_active() {
            return Vec::new();
        }
        self.ledger.clear();
        self.result = None;
        self.completed_at = None;
        self.started_at = self.clock.now();
        self.phase = AttemptPhase::Active {
            current_index: 0,
            remaining_seconds: self.document.duration_seconds(),
        };
        self.start_effects()
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn document(&self) -> &TestDocument {
        &self.document
    }

    #[must_use]
    pub fn phase(&self) -> AttemptPhase {
        self.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.phase.is_active()
    }

    /// The scored result; present once the attempt completed, frozen
    /// until restart.
    #[must_use]
    pub fn result(&self) -> Option<&AttemptResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// The question the cursor points at; `None` once completed.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            AttemptPhase::Active { current_index, .. } => {
                self.document.questions().get(current_index)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        match self.phase {
            AttemptPhase::Active { current_index, .. } => current_index,
            _ => 0,
        }
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        match self.phase {
            AttemptPhase::Active {
                remaining_seconds, ..
            } => remaining_seconds,
            _ => 0,
        }
    }

    /// The chosen key for a question, or `None` if unanswered.
    #[must_use]
    pub fn selected(&self, question_id: &QuestionId) -> Option<OptionKey> {
        self.ledger.get(question_id)
    }

    /// Number of questions answered so far.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.ledger.len()
    }
}

impl fmt::Debug for AttemptEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttemptEngine")
            .field("test_id", self.document.id())
            .field("questions", &self.document.question_count())
            .field("phase", &self.phase)
            .field("answered", &self.ledger.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
