use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use services::TestSummary;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn CollectionView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let content = ctx.content();
    let identity = ctx.identity();
    let user_id = identity.current_user_id();

    let resource = {
        let content = content.clone();
        let user_id = user_id.clone();
        use_resource(move || {
            let content = content.clone();
            let user_id = user_id.clone();
            async move {
                let Some(owner) = user_id else {
                    return Ok::<_, ViewError>(Vec::new());
                };
                content
                    .list_tests(&owner)
                    .await
                    .map_err(|_| ViewError::LoadFailed)
            }
        })
    };
    let state = view_state_from_resource(&resource);

    let retry = use_callback(move |()| {
        let mut resource = resource;
        resource.restart();
    });

    let signed_in_user = user_id.clone();

    rsx! {
        div { class: "page collection-page",
            h2 { "My Tests" }
            if signed_in_user.is_none() {
                p { "Sign in to see your tests." }
            } else {
                match state {
                    ViewState::Idle => rsx! {
                        p { "Idle" }
                    },
                    ViewState::Loading => rsx! {
                        p { "Loading..." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| retry.call(()),
                            "Retry"
                        }
                    },
                    ViewState::Ready(tests) => rsx! {
                        if tests.is_empty() {
                            p { "No tests yet." }
                            Link { class: "btn btn-primary", to: Route::NewTest {}, "Generate your first test" }
                        } else {
                            div { class: "test-grid",
                                for test in tests {
                                    TestCard {
                                        test: test.clone(),
                                        on_open: {
                                            let user = signed_in_user.clone();
                                            move |test: TestSummary| {
                                                if let Some(user) = user.as_ref() {
                                                    let _ = navigator.push(Route::Instruction {
                                                        user_id: user.as_str().to_string(),
                                                        test_id: test.id.as_str().to_string(),
                                                    });
                                                }
                                            }
                                        },
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn TestCard(test: TestSummary, on_open: EventHandler<TestSummary>) -> Element {
    let created = test
        .created_at
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let count_label = format!("{} questions", test.question_count);
    let difficulty_label = test.difficulty.label();

    rsx! {
        button {
            class: "test-card",
            r#type: "button",
            onclick: {
                let test = test.clone();
                move |_| on_open.call(test.clone())
            },
            h3 { class: "test-card__title", "{test.title}" }
            p { class: "test-card__meta", "{count_label} · {difficulty_label}" }
            if !created.is_empty() {
                p { class: "test-card__date", "Created {created}" }
            }
        }
    }
}
