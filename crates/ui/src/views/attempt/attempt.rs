use std::cell::RefCell;
use std::rc::Rc;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use keyboard_types::Key;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use quiz_core::engine::{AttemptEvent, AttemptPhase, Effect};
use quiz_core::model::{OptionKey, Question, QuestionId, TestId};
use quiz_core::scorer::AttemptResult;
use services::{AttemptError, CountdownTimer, ExclusiveModeGuard};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::access::attempt_access_allowed;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AttemptVm, format_clock, performance_message};

use super::guard::FullscreenGuard;
use super::scripts;

/// Below this many remaining seconds the countdown turns red.
const LOW_TIME_SECS: u32 = 30;

#[derive(Debug, Clone, Copy)]
enum TimerMsg {
    Tick,
    Expired,
}

/// Bridge between the timer's worker callbacks and the UI task.
///
/// Timer callbacks run off the UI thread and cannot touch signals, so
/// they push messages here and a local task drains them into events.
#[derive(Clone)]
struct TimerChannel {
    tx: UnboundedSender<TimerMsg>,
    rx: Rc<RefCell<Option<UnboundedReceiver<TimerMsg>>>>,
}

impl TimerChannel {
    fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Rc::new(RefCell::new(Some(rx))),
        }
    }
}

#[derive(Clone, PartialEq)]
struct OptionRow {
    key: OptionKey,
    text: String,
    selected: bool,
}

#[derive(Clone, PartialEq)]
struct ActiveCard {
    title: String,
    question_id: QuestionId,
    prompt: String,
    difficulty: &'static str,
    index: usize,
    count: usize,
    answered: usize,
    remaining: u32,
    options: Vec<OptionRow>,
}

fn active_card(vm: &AttemptVm) -> Option<ActiveCard> {
    let AttemptPhase::Active {
        remaining_seconds, ..
    } = vm.phase()
    else {
        return None;
    };
    let question = vm.current_question()?;
    let selected = vm.selected(question.id());
    let options = question
        .options()
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            let key = OptionKey::from_index(index).ok()?;
            Some(OptionRow {
                key,
                text: text.clone(),
                selected: selected == Some(key),
            })
        })
        .collect();
    Some(ActiveCard {
        title: vm.title().to_string(),
        question_id: question.id().clone(),
        prompt: question.prompt().to_string(),
        difficulty: question.difficulty().label(),
        index: vm.current_index(),
        count: vm.question_count(),
        answered: vm.answered_count(),
        remaining: remaining_seconds,
        options,
    })
}

fn choice_label(question: &Question, key: Option<OptionKey>) -> String {
    match key {
        None => "Not answered".to_string(),
        Some(key) => match question.option(key) {
            Some(text) => format!("{}. {text}", key.letter()),
            None => key.letter().to_string(),
        },
    }
}

#[component]
pub fn AttemptView(user_id: String, test_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let attempts = ctx.attempts();
    let identity = ctx.identity();
    let allowed = attempt_access_allowed(identity.as_ref(), &user_id, &test_id);

    let vm = use_signal(|| None::<AttemptVm>);
    let timer = use_hook(|| Rc::new(RefCell::new(CountdownTimer::new())));
    let fullscreen = use_hook(|| Rc::new(FullscreenGuard::default()));
    let channel = use_hook(TimerChannel::new);

    // Unauthorized visits bounce back to the landing page.
    use_effect(move || {
        if !allowed {
            let _ = navigator.push(Route::Home {});
        }
    });

    let run_effects = {
        let timer = timer.clone();
        let fullscreen = fullscreen.clone();
        let tx = channel.tx.clone();
        use_callback(move |effects: Vec<Effect>| {
            for effect in effects {
                match effect {
                    Effect::StartTimer { duration_seconds } => {
                        let tick_tx = tx.clone();
                        let expire_tx = tx.clone();
                        timer.borrow_mut().start(
                            duration_seconds,
                            move |_remaining| {
                                let _ = tick_tx.send(TimerMsg::Tick);
                            },
                            move || {
                                let _ = expire_tx.send(TimerMsg::Expired);
                            },
                        );
                    }
                    Effect::StopTimer => timer.borrow_mut().stop(),
                    Effect::EnterExclusive => fullscreen.enter(),
                    Effect::ExitExclusive => fullscreen.exit(),
                }
            }
        })
    };

    let dispatch = use_callback(move |event: AttemptEvent| {
        let effects = {
            let mut vm = vm;
            let mut slot = vm.write();
            slot.as_mut()
                .map_or_else(Vec::new, |vm| vm.dispatch(event))
        };
        if !effects.is_empty() {
            run_effects.call(effects);
        }
    });

    let resource = {
        let attempts = attempts.clone();
        let test_id = TestId::new(test_id.clone());
        use_resource(move || {
            let attempts = attempts.clone();
            let test_id = test_id.clone();
            let mut vm = vm;
            async move {
                if !allowed {
                    return Err(ViewError::Unknown);
                }
                let engine =
                    attempts
                        .start_attempt(&test_id)
                        .await
                        .map_err(|err| match err {
                            AttemptError::Content(content) if content.is_empty_test() => {
                                ViewError::EmptyTest
                            }
                            _ => ViewError::LoadFailed,
                        })?;
                let started = AttemptVm::new(engine);
                let effects = started.start_effects();
                vm.set(Some(started));
                run_effects.call(effects);
                Ok::<_, ViewError>(())
            }
        })
    };
    let state = view_state_from_resource(&resource);

    // Once an attempt exists, drain timer messages and watch for
    // fullscreen exits. Both feed the same dispatch path as buttons do.
    let channel_for_pump = channel.clone();
    use_effect(move || {
        if vm.read().is_none() {
            return;
        }
        let Some(mut rx) = channel_for_pump.rx.borrow_mut().take() else {
            return;
        };
        spawn(async move {
            while let Some(msg) = rx.recv().await {
                match msg {
                    TimerMsg::Tick => dispatch.call(AttemptEvent::Tick),
                    TimerMsg::Expired => dispatch.call(AttemptEvent::Expired),
                }
            }
        });
        spawn(async move {
            let mut watch = eval(scripts::FULLSCREEN_WATCH_SCRIPT);
            loop {
                match watch.recv::<bool>().await {
                    Ok(true) => {}
                    Ok(false) => dispatch.call(AttemptEvent::GuardExited),
                    Err(_) => break,
                }
            }
        });
    });

    let retry = use_callback(move |()| {
        let mut resource = resource;
        resource.restart();
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let is_active = vm
            .read()
            .as_ref()
            .is_some_and(|vm| vm.phase().is_active());
        if !is_active {
            return;
        }
        match evt.data.key() {
            Key::ArrowRight => {
                evt.prevent_default();
                dispatch.call(AttemptEvent::Next);
            }
            Key::ArrowLeft => {
                evt.prevent_default();
                dispatch.call(AttemptEvent::Previous);
            }
            Key::Character(value) => {
                let Ok(key) = value.as_str().parse::<OptionKey>() else {
                    return;
                };
                let target = vm.read().as_ref().and_then(|vm| {
                    vm.current_question()
                        .filter(|question| key.index() < question.options().len())
                        .map(|question| question.id().clone())
                });
                if let Some(question_id) = target {
                    evt.prevent_default();
                    dispatch.call(AttemptEvent::Select { question_id, key });
                }
            }
            _ => {}
        }
    });

    let vm_guard = vm.read();
    let phase = vm_guard.as_ref().map(AttemptVm::phase);
    let active = vm_guard.as_ref().and_then(active_card);
    let result: Option<AttemptResult> = vm_guard
        .as_ref()
        .and_then(|vm| vm.result().cloned());
    let reviewing = phase == Some(AttemptPhase::Reviewing);

    rsx! {
        div { class: "page attempt-page", id: "attempt-root", tabindex: "0", onkeydown: on_key,
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "attempt-loading", "Loading test..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "attempt-error",
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| retry.call(()),
                            "Retry"
                        }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = navigator.push(Route::Collection {});
                            },
                            "Back to My Tests"
                        }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(card) = active {
                        QuestionCard { card, dispatch }
                    } else if let Some(result) = result {
                        if reviewing {
                            ReviewPanel { result, dispatch }
                        } else {
                            SummaryPanel { result, dispatch }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn QuestionCard(card: ActiveCard, dispatch: Callback<AttemptEvent>) -> Element {
    let number = card.index + 1;
    let timer_class = if card.remaining <= LOW_TIME_SECS {
        "attempt-timer attempt-timer--low"
    } else {
        "attempt-timer"
    };
    let at_first = card.index == 0;
    let at_last = card.index + 1 == card.count;

    rsx! {
        header { class: "attempt-header",
            h2 { class: "attempt-title", "{card.title}" }
            span { class: "{timer_class}", "{format_clock(card.remaining)}" }
        }
        div { class: "attempt-progress",
            span { "Question {number} of {card.count}" }
            span { "{card.answered} answered" }
            span { class: "attempt-difficulty attempt-difficulty--{card.difficulty}", "{card.difficulty}" }
        }
        div { class: "attempt-question",
            p { class: "attempt-prompt", "{card.prompt}" }
            div { class: "attempt-options",
                for option in card.options {
                    button {
                        class: if option.selected {
                            "attempt-option attempt-option--selected"
                        } else {
                            "attempt-option"
                        },
                        r#type: "button",
                        onclick: {
                            let question_id = card.question_id.clone();
                            let key = option.key;
                            move |_| {
                                dispatch.call(AttemptEvent::Select {
                                    question_id: question_id.clone(),
                                    key,
                                });
                            }
                        },
                        span { class: "attempt-option__key", "{option.key.letter()}" }
                        span { class: "attempt-option__text", "{option.text}" }
                    }
                }
            }
        }
        footer { class: "attempt-nav",
            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled: at_first,
                onclick: move |_| dispatch.call(AttemptEvent::Previous),
                "Previous"
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled: at_last,
                onclick: move |_| dispatch.call(AttemptEvent::Next),
                "Next"
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| dispatch.call(AttemptEvent::Submit),
                "Submit Test"
            }
        }
    }
}

#[component]
fn SummaryPanel(result: AttemptResult, dispatch: Callback<AttemptEvent>) -> Element {
    let navigator = use_navigator();
    let percentage = result.percentage();

    rsx! {
        div { class: "attempt-complete",
            h2 { "Test Complete" }
            p { class: "attempt-score", "{percentage}%" }
            p { class: "attempt-verdict", "{performance_message(percentage)}" }
            div { class: "attempt-tally",
                span { class: "attempt-tally__correct", "{result.correct()} correct" }
                span { class: "attempt-tally__incorrect", "{result.incorrect()} incorrect" }
                span { class: "attempt-tally__skipped", "{result.unattempted()} unattempted" }
            }
            div { class: "attempt-complete__actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| dispatch.call(AttemptEvent::OpenReview),
                    "View Detailed Results"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| dispatch.call(AttemptEvent::Restart),
                    "Retake Test"
                }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Collection {});
                    },
                    "Back to My Tests"
                }
            }
        }
    }
}

#[component]
fn ReviewPanel(result: AttemptResult, dispatch: Callback<AttemptEvent>) -> Element {
    rsx! {
        div { class: "attempt-review",
            header { class: "attempt-review__header",
                h2 { "Detailed Results" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| dispatch.call(AttemptEvent::CloseReview),
                    "Back to Summary"
                }
            }
            ol { class: "attempt-review__list",
                for outcome in result.outcomes().iter() {
                    li {
                        class: if outcome.is_correct {
                            "attempt-review__item attempt-review__item--correct"
                        } else {
                            "attempt-review__item attempt-review__item--incorrect"
                        },
                        p { class: "attempt-review__prompt", "{outcome.question.prompt()}" }
                        p { class: "attempt-review__chosen",
                            "Your answer: {choice_label(&outcome.question, outcome.chosen)}"
                        }
                        if !outcome.is_correct {
                            p { class: "attempt-review__correct",
                                "Correct answer: {outcome.question.correct_key().letter()}. {outcome.question.correct_option()}"
                            }
                        }
                        if let Some(explanation) = outcome.question.explanation() {
                            p { class: "attempt-review__explanation", "{explanation}" }
                        }
                    }
                }
            }
        }
    }
}
