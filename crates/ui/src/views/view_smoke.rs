use quiz_core::model::UserId;
use services::StaticIdentity;

use super::test_harness::{ViewKind, sample_document, setup_view_harness};

fn signed_in() -> StaticIdentity {
    StaticIdentity::signed_in(UserId::new("u1"))
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_hero() {
    let mut harness = setup_view_harness(ViewKind::Home, Vec::new(), signed_in());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Generate a Test"), "missing cta in {html}");
    assert!(html.contains("My Tests"), "missing collection link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn collection_view_smoke_lists_tests() {
    let mut harness = setup_view_harness(
        ViewKind::Collection,
        vec![sample_document("t-1")],
        signed_in(),
    );
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Smoke Test"), "missing test card in {html}");
    assert!(html.contains("3 questions"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn collection_view_smoke_prompts_when_signed_out() {
    let mut harness = setup_view_harness(
        ViewKind::Collection,
        vec![sample_document("t-1")],
        StaticIdentity::signed_out(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sign in"), "missing sign-in prompt in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn instruction_view_smoke_shows_rules_and_start() {
    let mut harness = setup_view_harness(
        ViewKind::Instruction {
            user_id: "u1".to_string(),
            test_id: "t-1".to_string(),
        },
        vec![sample_document("t-1")],
        signed_in(),
    );
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Smoke Test"), "missing title in {html}");
    assert!(html.contains("05:00"), "missing time limit in {html}");
    assert!(html.contains("Start Test"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn attempt_view_smoke_shows_first_question() {
    let mut harness = setup_view_harness(
        ViewKind::Attempt {
            user_id: "u1".to_string(),
            test_id: "t-1".to_string(),
        },
        vec![sample_document("t-1")],
        signed_in(),
    );
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("Prompt q1?"), "missing prompt in {html}");
    assert!(html.contains("Submit Test"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn attempt_view_smoke_reports_missing_test() {
    let mut harness = setup_view_harness(
        ViewKind::Attempt {
            user_id: "u1".to_string(),
            test_id: "missing".to_string(),
        },
        vec![sample_document("t-1")],
        signed_in(),
    );
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(
        html.contains("Failed to load the test"),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}
