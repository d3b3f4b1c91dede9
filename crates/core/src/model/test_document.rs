use std::collections::HashSet;
use thiserror::Error;

use crate::model::{Question, QuestionError, QuestionId, TestId};

/// Errors that can occur when building a test document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestDocumentError {
    #[error("test contains no questions")]
    EmptyTest,

    #[error("test duration must be positive, got {0}")]
    InvalidDuration(u32),

    #[error("duplicate question id {0}")]
    DuplicateQuestionId(QuestionId),

    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// An ordered set of questions with a fixed time budget.
///
/// Immutable once loaded for a session; restarting an attempt reuses
/// the same document with a fresh ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDocument {
    id: TestId,
    title: String,
    duration_seconds: u32,
    questions: Vec<Question>,
}

impl TestDocument {
    /// Build a validated test document.
    ///
    /// # Errors
    ///
    /// Returns `TestDocumentError::EmptyTest` for a question-less test,
    /// `TestDocumentError::InvalidDuration` for a zero duration, and
    /// `TestDocumentError::DuplicateQuestionId` when question ids collide.
    pub fn new(
        id: TestId,
        title: impl Into<String>,
        duration_seconds: u32,
        questions: Vec<Question>,
    ) -> Result<Self, TestDocumentError> {
        if duration_seconds == 0 {
            return Err(TestDocumentError::InvalidDuration(duration_seconds));
        }
        if questions.is_empty() {
            return Err(TestDocumentError::EmptyTest);
        }
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id().clone()) {
                return Err(TestDocumentError::DuplicateQuestionId(
                    question.id().clone(),
                ));
            }
        }

        Ok(Self {
            id,
            title: title.into(),
            duration_seconds,
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> &TestId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Total number of questions. Always at least one.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Looks up a question by id.
    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// Returns true if the document contains a question with this id.
    #[must_use]
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.question(id).is_some()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DifficultyLevel, OptionKey};

    fn build_question(id: &str) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Prompt for {id}?"),
            vec!["first".to_string(), "second".to_string()],
            OptionKey::from_index(0).unwrap(),
            DifficultyLevel::Easy,
            None,
        )
        .unwrap()
    }

    #[test]
    fn empty_test_is_rejected() {
        let err = TestDocument::new(TestId::new("t1"), "Empty", 60, Vec::new()).unwrap_err();
        assert!(matches!(err, TestDocumentError::EmptyTest));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = TestDocument::new(
            TestId::new("t1"),
            "Rushed",
            0,
            vec![build_question("q1")],
        )
        .unwrap_err();
        assert!(matches!(err, TestDocumentError::InvalidDuration(0)));
    }

    #[test]
    fn duplicate_question_ids_are_rejected() {
        let err = TestDocument::new(
            TestId::new("t1"),
            "Dup",
            60,
            vec![build_question("q1"), build_question("q1")],
        )
        .unwrap_err();
        assert!(matches!(err, TestDocumentError::DuplicateQuestionId(_)));
    }

    #[test]
    fn lookup_by_question_id() {
        let document = TestDocument::new(
            TestId::new("t1"),
            "Basics",
            60,
            vec![build_question("q1"), build_question("q2")],
        )
        .unwrap();

        assert_eq!(document.question_count(), 2);
        assert!(document.contains(&QuestionId::new("q2")));
        assert!(document.question(&QuestionId::new("q3")).is_none());
    }
}
