use std::collections::HashMap;

use crate::model::{OptionKey, QuestionId};

/// Per-question record of the user's selected answers.
///
/// Entries are only added or overwritten by explicit selection and are
/// never removed during a session; `clear` exists solely for restart.
/// The ledger does not validate that a key matches one of the
/// question's options — that check happens at scoring time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerLedger {
    choices: HashMap<QuestionId, OptionKey>,
}

impl AnswerLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice, replacing any prior selection for the question.
    pub fn select(&mut self, question_id: QuestionId, key: OptionKey) {
        self.choices.insert(question_id, key);
    }

    /// The chosen key for a question, or `None` if unanswered.
    #[must_use]
    pub fn get(&self, question_id: &QuestionId) -> Option<OptionKey> {
        self.choices.get(question_id).copied()
    }

    /// Drops every selection. Used on restart only.
    pub fn clear(&mut self) {
        self.choices.clear();
    }

    /// Number of questions with a recorded selection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn key(index: usize) -> OptionKey {
        OptionKey::from_index(index).unwrap()
    }

    #[test]
    fn selection_overwrites_prior_choice() {
        let mut ledger = AnswerLedger::new();
        let q1 = QuestionId::new("q1");

        ledger.select(q1.clone(), key(0));
        assert_eq!(ledger.get(&q1), Some(key(0)));

        ledger.select(q1.clone(), key(2));
        assert_eq!(ledger.get(&q1), Some(key(2)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn unanswered_questions_read_as_none() {
        let ledger = AnswerLedger::new();
        assert_eq!(ledger.get(&QuestionId::new("missing")), None);
    }

    #[test]
    fn clear_empties_all_entries() {
        let mut ledger = AnswerLedger::new();
        ledger.select(QuestionId::new("q1"), key(0));
        ledger.select(QuestionId::new("q2"), key(1));

        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.get(&QuestionId::new("q1")), None);
    }
}
