use std::sync::Arc;

use async_trait::async_trait;

use quiz_core::engine::{AttemptEvent, Effect};
use quiz_core::model::{
    DifficultyLevel, OptionKey, Question, QuestionId, TestDocument, TestId, UserId,
};
use quiz_core::time::fixed_clock;
use services::{AttemptError, AttemptService, ContentError, TestContentProvider, TestSummary};

/// Provider backed by a fixed set of documents, no HTTP.
struct InMemoryContent {
    documents: Vec<TestDocument>,
}

#[async_trait]
impl TestContentProvider for InMemoryContent {
    async fn fetch_test_by_id(&self, test_id: &TestId) -> Result<TestDocument, ContentError> {
        self.documents
            .iter()
            .find(|document| document.id() == test_id)
            .cloned()
            .ok_or_else(|| ContentError::NotFound(test_id.clone()))
    }

    async fn create_test(
        &self,
        _prompt: &str,
        _owner: &UserId,
        _duration_seconds: u32,
    ) -> Result<TestSummary, ContentError> {
        unimplemented!("not exercised by the attempt flow")
    }

    async fn list_tests(&self, _owner: &UserId) -> Result<Vec<TestSummary>, ContentError> {
        Ok(Vec::new())
    }
}

fn build_question(id: &str, correct_index: usize) -> Question {
    Question::new(
        QuestionId::new(id),
        format!("Prompt {id}?"),
        vec!["one".to_string(), "two".to_string(), "three".to_string()],
        OptionKey::from_index(correct_index).unwrap(),
        DifficultyLevel::Easy,
        None,
    )
    .unwrap()
}

fn build_service() -> AttemptService {
    let document = TestDocument::new(
        TestId::new("t-1"),
        "Smoke Test",
        5,
        vec![
            build_question("q1", 1),
            build_question("q2", 1),
            build_question("q3", 2),
        ],
    )
    .unwrap();
    AttemptService::new(
        fixed_clock(),
        Arc::new(InMemoryContent {
            documents: vec![document],
        }),
    )
}

fn key(index: usize) -> OptionKey {
    OptionKey::from_index(index).unwrap()
}

#[tokio::test]
async fn attempt_runs_from_fetch_to_scored_result() {
    let service = build_service();
    let mut engine = service.start_attempt(&TestId::new("t-1")).await.unwrap();

    assert_eq!(engine.remaining_seconds(), 5);
    assert_eq!(engine.current_question().unwrap().id().as_str(), "q1");

    // A for q1 (wrong, correct is B), B for q2 (correct), q3 untouched.
    engine.apply(AttemptEvent::Select {
        question_id: QuestionId::new("q1"),
        key: key(0),
    });
    engine.apply(AttemptEvent::Select {
        question_id: QuestionId::new("q2"),
        key: key(1),
    });

    let effects = engine.apply(AttemptEvent::Submit);
    assert_eq!(effects, vec![Effect::StopTimer, Effect::ExitExclusive]);

    let result = engine.result().unwrap();
    assert_eq!(result.correct(), 1);
    assert_eq!(result.incorrect(), 1);
    assert_eq!(result.unattempted(), 1);
    assert_eq!(result.percentage(), 33);
}

#[tokio::test]
async fn five_ticks_then_expiry_auto_submits_over_the_current_ledger() {
    let service = build_service();
    let mut engine = service.start_attempt(&TestId::new("t-1")).await.unwrap();

    for expected in (0..5).rev() {
        engine.apply(AttemptEvent::Tick);
        assert_eq!(engine.remaining_seconds(), expected);
    }
    engine.apply(AttemptEvent::Expired);

    let result = engine.result().unwrap();
    assert_eq!(result.unattempted(), 3);
    assert_eq!(result.correct() + result.incorrect() + result.unattempted(), 3);
}

#[tokio::test]
async fn restart_issues_fresh_ledger_and_budget() {
    let service = build_service();
    let mut engine = service.start_attempt(&TestId::new("t-1")).await.unwrap();

    engine.apply(AttemptEvent::Select {
        question_id: QuestionId::new("q2"),
        key: key(1),
    });
    engine.apply(AttemptEvent::Tick);
    engine.apply(AttemptEvent::GuardExited);
    assert!(engine.result().is_some());

    let effects = engine.apply(AttemptEvent::Restart);
    assert!(effects.contains(&Effect::StartTimer {
        duration_seconds: 5
    }));
    assert!(effects.contains(&Effect::EnterExclusive));
    assert_eq!(engine.remaining_seconds(), 5);
    for question in engine.document().questions() {
        assert_eq!(engine.selected(question.id()), None);
    }
}

#[tokio::test]
async fn unknown_test_id_is_a_load_failure() {
    let service = build_service();
    let err = service
        .start_attempt(&TestId::new("missing"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AttemptError::Content(ContentError::NotFound(_))
    ));
}
