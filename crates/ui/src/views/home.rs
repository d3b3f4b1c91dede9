use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home-page",
            h2 { "Prepare for any test" }
            p { class: "home-tagline",
                "Generate a timed multiple-choice test from any topic, take it under exam conditions, and review every answer."
            }
            div { class: "home-actions",
                Link { class: "btn btn-primary", to: Route::NewTest {}, "Generate a Test" }
                Link { class: "btn btn-secondary", to: Route::Collection {}, "My Tests" }
            }
        }
    }
}
