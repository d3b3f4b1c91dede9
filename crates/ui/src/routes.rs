use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AttemptView, CollectionView, HomeView, InstructionView, NewTestView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/collection", CollectionView)] Collection {},
        #[route("/new-test", NewTestView)] NewTest {},
        #[route("/instructions/:user_id/:test_id", InstructionView)] Instruction { user_id: String, test_id: String },
    #[end_layout]
    // The attempt runs fullscreen, outside the sidebar chrome.
    #[route("/attempt/:user_id/:test_id", AttemptView)] Attempt { user_id: String, test_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Prept" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Collection {}, "My Tests" } }
                li { Link { to: Route::NewTest {}, "New Test" } }
            }
        }
    }
}
