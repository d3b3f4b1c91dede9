use crate::ledger::AnswerLedger;
use crate::model::{OptionKey, Question, TestDocument};

/// How a single question fared in a scored attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub question: Question,
    pub chosen: Option<OptionKey>,
    pub is_correct: bool,
}

/// Aggregate result of one scored attempt.
///
/// `correct + incorrect + unattempted` always equals the document's
/// question count; outcomes preserve document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptResult {
    correct: u32,
    incorrect: u32,
    unattempted: u32,
    percentage: u32,
    outcomes: Vec<QuestionOutcome>,
}

impl AttemptResult {
    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn unattempted(&self) -> u32 {
        self.unattempted
    }

    /// Whole-number percentage, `round(100 * correct / total)`.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.outcomes.len()
    }
}

/// Score a ledger snapshot against a test document.
///
/// Pure and deterministic: identical inputs always yield an identical
/// result. A ledger entry matching the question's correct key counts as
/// correct, any other entry as incorrect, no entry as unattempted.
/// There is no partial credit and no negative marking.
#[must_use]
pub fn score(document: &TestDocument, ledger: &AnswerLedger) -> AttemptResult {
    let mut correct = 0_u32;
    let mut incorrect = 0_u32;
    let mut unattempted = 0_u32;

    let outcomes: Vec<QuestionOutcome> = document
        .questions()
        .iter()
        .map(|question| {
            let chosen = ledger.get(question.id());
            let is_correct = chosen == Some(question.correct_key());
            match chosen {
                None => unattempted += 1,
                Some(_) if is_correct => correct += 1,
                Some(_) => incorrect += 1,
            }
            QuestionOutcome {
                question: question.clone(),
                chosen,
                is_correct,
            }
        })
        .collect();

    // Document validation guarantees at least one question.
    let total = outcomes.len() as u32;
    let percentage = ((f64::from(correct) * 100.0) / f64::from(total)).round() as u32;

    AttemptResult {
        correct,
        incorrect,
        unattempted,
        percentage,
        outcomes,
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
