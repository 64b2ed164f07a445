use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdKeyRound;
use dioxus_free_icons::Icon;

mod api;
mod pages;

use pages::*;

// ============================================================
// Routes
// ============================================================
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        Requests {},
}

// ============================================================
// Assets
// ============================================================
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Secret Management System" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

// ============================================================
// Layout
// ============================================================
#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "page",
            header { class: "page-header",
                Icon { width: 22, height: 22, icon: LdKeyRound }
                h1 { "Secret Management System - Demo" }
            }
            main { Outlet::<Route> {} }
        }
    }
}
