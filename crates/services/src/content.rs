use std::env;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use quiz_core::model::{
    DifficultyLevel, OptionKey, Question, QuestionId, TestDocument, TestId, UserId,
};

use crate::error::ContentError;

/// Lightweight listing entry for a user's tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSummary {
    pub id: TestId,
    pub title: String,
    pub question_count: usize,
    pub difficulty: DifficultyLevel,
    pub created_at: Option<DateTime<Utc>>,
}

/// Backend capability that generates and serves test documents.
///
/// The attempt flow only consumes `fetch_test_by_id`; creation and
/// listing back the dashboard pages.
#[async_trait]
pub trait TestContentProvider: Send + Sync {
    /// Fetch a full test document by id.
    async fn fetch_test_by_id(&self, test_id: &TestId) -> Result<TestDocument, ContentError>;

    /// Ask the backend to generate a new test from a prompt.
    async fn create_test(
        &self,
        prompt: &str,
        owner: &UserId,
        duration_seconds: u32,
    ) -> Result<TestSummary, ContentError>;

    /// List the tests belonging to a user.
    async fn list_tests(&self, owner: &UserId) -> Result<Vec<TestSummary>, ContentError>;
}

#[derive(Clone, Debug)]
pub struct ContentConfig {
    pub base_url: String,
}

impl ContentConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("QUIZ_SERVER_URL").unwrap_or_else(|_| "http://localhost:4000".into());
        Self { base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}

/// HTTP implementation of the content provider.
#[derive(Clone)]
pub struct HttpTestContent {
    client: Client,
    config: ContentConfig,
}

impl HttpTestContent {
    #[must_use]
    pub fn new(config: ContentConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ContentConfig::from_env())
    }
}

#[async_trait]
impl TestContentProvider for HttpTestContent {
    async fn fetch_test_by_id(&self, test_id: &TestId) -> Result<TestDocument, ContentError> {
        let response = self
            .client
            .post(self.config.endpoint("api/v1/tests/by-id"))
            .json(&FetchTestRequest {
                test_id: test_id.as_str(),
            })
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ContentError::NotFound(test_id.clone()));
        }
        if !response.status().is_success() {
            return Err(ContentError::HttpStatus(response.status()));
        }

        let body: TestEnvelope = response.json().await?;
        body.test.into_document()
    }

    async fn create_test(
        &self,
        prompt: &str,
        owner: &UserId,
        duration_seconds: u32,
    ) -> Result<TestSummary, ContentError> {
        let response = self
            .client
            .post(self.config.endpoint("api/v1/tests/create"))
            .json(&CreateTestRequest {
                prompt,
                owner_id: owner.as_str(),
                duration_seconds,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ContentError::HttpStatus(response.status()));
        }

        let body: TestEnvelope = response.json().await?;
        let summary = body.test.summary();
        body.test.into_document()?;
        Ok(summary)
    }

    async fn list_tests(&self, owner: &UserId) -> Result<Vec<TestSummary>, ContentError> {
        let response = self
            .client
            .post(self.config.endpoint("api/v1/tests/by-owner"))
            .json(&ListTestsRequest {
                owner_id: owner.as_str(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ContentError::HttpStatus(response.status()));
        }

        let body: TestListEnvelope = response.json().await?;
        // Question-less or malformed documents are dropped from the
        // listing rather than failing the whole page.
        let summaries = body
            .tests
            .into_iter()
            .filter_map(|dto| {
                let summary = dto.summary();
                match dto.into_document() {
                    Ok(_) => Some(summary),
                    Err(err) => {
                        debug!(test_id = %summary.id, %err, "skipping unusable test in listing");
                        None
                    }
                }
            })
            .collect();
        Ok(summaries)
    }
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FetchTestRequest<'a> {
    test_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTestRequest<'a> {
    prompt: &'a str,
    owner_id: &'a str,
    duration_seconds: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListTestsRequest<'a> {
    owner_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TestEnvelope {
    pub(crate) test: TestDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TestListEnvelope {
    pub(crate) tests: Vec<TestDto>,
}

/// Wire shape of a test document as the backend serves it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TestDto {
    #[serde(rename = "_id")]
    pub(crate) id: String,
    pub(crate) module_name: String,
    pub(crate) duration_seconds: u32,
    #[serde(default)]
    pub(crate) module_data: Vec<QuestionDto>,
    #[serde(default)]
    pub(crate) created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionDto {
    #[serde(rename = "_id")]
    pub(crate) id: String,
    pub(crate) question: String,
    pub(crate) options: Vec<String>,
    /// Letter key of the correct option.
    pub(crate) answer: String,
    pub(crate) level: DifficultyLevel,
    #[serde(default)]
    pub(crate) explanation: Option<String>,
}

impl TestDto {
    pub(crate) fn into_document(self) -> Result<TestDocument, ContentError> {
        let questions = self
            .module_data
            .into_iter()
            .map(QuestionDto::into_question)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TestDocument::new(
            TestId::new(self.id),
            self.module_name,
            self.duration_seconds,
            questions,
        )?)
    }

    pub(crate) fn summary(&self) -> TestSummary {
        TestSummary {
            id: TestId::new(self.id.clone()),
            title: self.module_name.clone(),
            question_count: self.module_data.len(),
            difficulty: overall_difficulty(&self.module_data),
            created_at: self.created_at,
        }
    }
}

impl QuestionDto {
    fn into_question(self) -> Result<Question, ContentError> {
        let correct_key: OptionKey = self.answer.parse()?;
        Ok(Question::new(
            QuestionId::new(self.id),
            self.question,
            self.options,
            correct_key,
            self.level,
            self.explanation,
        )
        .map_err(quiz_core::model::TestDocumentError::from)?)
    }
}

/// The level most of a test's questions carry; ties resolve upward.
fn overall_difficulty(questions: &[QuestionDto]) -> DifficultyLevel {
    let mut counts = [0_usize; 3];
    for question in questions {
        let slot = match question.level {
            DifficultyLevel::Easy => 0,
            DifficultyLevel::Medium => 1,
            DifficultyLevel::Hard => 2,
        };
        counts[slot] += 1;
    }
    let best = counts.iter().copied().max().unwrap_or(0);
    if counts[2] == best && best > 0 {
        DifficultyLevel::Hard
    } else if counts[1] == best && best > 0 {
        DifficultyLevel::Medium
    } else {
        DifficultyLevel::Easy
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
