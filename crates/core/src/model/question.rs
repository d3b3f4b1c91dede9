use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{OptionKey, QuestionId};

/// Errors that can occur when building a question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id} has {len} options, at least 2 are required")]
    TooFewOptions { id: QuestionId, len: usize },

    #[error("question {id} answer key {key} does not match any of its {len} options")]
    AnswerKeyOutOfRange {
        id: QuestionId,
        key: OptionKey,
        len: usize,
    },

    #[error("question {id} has an empty prompt")]
    EmptyPrompt { id: QuestionId },
}

/// How demanding a question is considered to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    /// Human-readable label for UI badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Medium => "medium",
            DifficultyLevel::Hard => "hard",
        }
    }
}

/// A single multiple-choice question.
///
/// Immutable once constructed. The correct answer is stored as the
/// position-derived letter key of one of the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct_key: OptionKey,
    difficulty: DifficultyLevel,
    explanation: Option<String>,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::TooFewOptions` for fewer than two options,
    /// `QuestionError::AnswerKeyOutOfRange` if the correct key points past
    /// the option list, and `QuestionError::EmptyPrompt` for a blank prompt.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_key: OptionKey,
        difficulty: DifficultyLevel,
        explanation: Option<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt { id });
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                id,
                len: options.len(),
            });
        }
        if correct_key.index() >= options.len() {
            return Err(QuestionError::AnswerKeyOutOfRange {
                id,
                key: correct_key,
                len: options.len(),
            });
        }

        Ok(Self {
            id,
            prompt,
            options,
            correct_key,
            difficulty,
            explanation,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_key(&self) -> OptionKey {
        self.correct_key
    }

    #[must_use]
    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Returns the option text a key refers to, if the key is in range.
    #[must_use]
    pub fn option(&self, key: OptionKey) -> Option<&str> {
        self.options.get(key.index()).map(String::as_str)
    }

    /// The text of the correct option.
    #[must_use]
    pub fn correct_option(&self) -> &str {
        // The constructor guarantees the key is in range.
        &self.options[self.correct_key.index()]
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {i}")).collect()
    }

    #[test]
    fn question_requires_two_options() {
        let err = Question::new(
            QuestionId::new("q1"),
            "Prompt?",
            options(1),
            OptionKey::from_index(0).unwrap(),
            DifficultyLevel::Easy,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, QuestionError::TooFewOptions { len: 1, .. }));
    }

    #[test]
    fn answer_key_must_point_at_an_option() {
        let err = Question::new(
            QuestionId::new("q1"),
            "Prompt?",
            options(3),
            OptionKey::from_index(3).unwrap(),
            DifficultyLevel::Medium,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            QuestionError::AnswerKeyOutOfRange { len: 3, .. }
        ));
    }

    #[test]
    fn correct_option_resolves_by_key() {
        let question = Question::new(
            QuestionId::new("q1"),
            "Prompt?",
            options(4),
            OptionKey::from_index(2).unwrap(),
            DifficultyLevel::Hard,
            Some("because".to_string()),
        )
        .unwrap();
        assert_eq!(question.correct_option(), "option 2");
        assert_eq!(
            question.option(OptionKey::from_index(1).unwrap()),
            Some("option 1")
        );
        assert_eq!(question.option(OptionKey::from_index(9).unwrap()), None);
    }
}
