use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::TestId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::access::attempt_access_allowed;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::format_clock;

#[derive(Clone, Debug, PartialEq)]
struct TestBrief {
    title: String,
    question_count: usize,
    duration_seconds: u32,
}

#[component]
pub fn InstructionView(user_id: String, test_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let content = ctx.content();
    let identity = ctx.identity();
    let allowed = attempt_access_allowed(identity.as_ref(), &user_id, &test_id);

    // Unauthorized visits bounce back to the landing page.
    use_effect(move || {
        if !allowed {
            let _ = navigator.push(Route::Home {});
        }
    });

    let resource = {
        let content = content.clone();
        let test_id = TestId::new(test_id.clone());
        use_resource(move || {
            let content = content.clone();
            let test_id = test_id.clone();
            async move {
                let document = content
                    .fetch_test_by_id(&test_id)
                    .await
                    .map_err(|err| {
                        if err.is_empty_test() {
                            ViewError::EmptyTest
                        } else {
                            ViewError::LoadFailed
                        }
                    })?;
                Ok::<_, ViewError>(TestBrief {
                    title: document.title().to_string(),
                    question_count: document.question_count(),
                    duration_seconds: document.duration_seconds(),
                })
            }
        })
    };
    let state = view_state_from_resource(&resource);

    let retry = use_callback(move |()| {
        let mut resource = resource;
        resource.restart();
    });

    let start_route = Route::Attempt {
        user_id: user_id.clone(),
        test_id: test_id.clone(),
    };

    rsx! {
        div { class: "page instruction-page",
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
                ViewState::Ready(brief) => rsx! {
                    h2 { "{brief.title}" }
                    p { class: "instruction-meta",
                        "{brief.question_count} questions · {format_clock(brief.duration_seconds)} time limit"
                    }
                    ul { class: "instruction-rules",
                        li { "The test runs in fullscreen. Leaving fullscreen submits it immediately." }
                        li { "The countdown starts as soon as the test opens and cannot be paused." }
                        li { "When the timer runs out, whatever you have answered is submitted." }
                        li { "You can move between questions and change answers until you submit." }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(start_route.clone());
                        },
                        "Start Test"
                    }
                },
            }
        }
    }
}
