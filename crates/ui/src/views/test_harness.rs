use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use quiz_core::model::{
    DifficultyLevel, OptionKey, Question, QuestionId, TestDocument, TestId, UserId,
};
use quiz_core::time::fixed_clock;
use services::{
    AttemptService, ContentError, Identity, StaticIdentity, TestContentProvider, TestSummary,
};

use crate::context::{UiApp, build_app_context};
use crate::views::{AttemptView, CollectionView, HomeView, InstructionView};

/// Provider backed by a fixed set of documents, no HTTP.
pub struct StubContent {
    documents: Vec<TestDocument>,
}

#[async_trait]
impl TestContentProvider for StubContent {
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
        unimplemented!("not exercised by view smoke tests")
    }

    async fn list_tests(&self, _owner: &UserId) -> Result<Vec<TestSummary>, ContentError> {
        Ok(self
            .documents
            .iter()
            .map(|document| TestSummary {
                id: document.id().clone(),
                title: document.title().to_string(),
                question_count: document.question_count(),
                difficulty: DifficultyLevel::Easy,
                created_at: None,
            })
            .collect())
    }
}

#[derive(Clone)]
struct TestApp {
    attempts: Arc<AttemptService>,
    identity: Arc<dyn Identity>,
}

impl UiApp for TestApp {
    fn attempts(&self) -> Arc<AttemptService> {
        Arc::clone(&self.attempts)
    }

    fn identity(&self) -> Arc<dyn Identity> {
        Arc::clone(&self.identity)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Collection,
    Instruction { user_id: String, test_id: String },
    Attempt { user_id: String, test_id: String },
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Collection => rsx! { CollectionView {} },
        ViewKind::Instruction { user_id, test_id } => rsx! {
            InstructionView { user_id, test_id }
        },
        ViewKind::Attempt { user_id, test_id } => rsx! {
            AttemptView { user_id, test_id }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Three questions with correct keys A, B, C and a five-minute budget.
pub fn sample_document(test_id: &str) -> TestDocument {
    let question = |id: &str, correct: usize| {
        Question::new(
            QuestionId::new(id),
            format!("Prompt {id}?"),
            vec!["one".to_string(), "two".to_string(), "three".to_string()],
            OptionKey::from_index(correct).unwrap(),
            DifficultyLevel::Medium,
            Some(format!("Because {id}")),
        )
        .unwrap()
    };
    TestDocument::new(
        TestId::new(test_id),
        "Smoke Test",
        300,
        vec![question("q1", 0), question("q2", 1), question("q3", 2)],
    )
    .unwrap()
}

pub fn setup_view_harness(
    view: ViewKind,
    documents: Vec<TestDocument>,
    identity: StaticIdentity,
) -> ViewHarness {
    let content = Arc::new(StubContent { documents });
    let attempts = Arc::new(AttemptService::new(fixed_clock(), content));
    let app = Arc::new(TestApp {
        attempts,
        identity: Arc::new(identity),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
