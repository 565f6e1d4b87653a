use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Landing card with a single call to action.
#[component]
pub fn WelcomeView(on_create: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "welcome",
            div {
                class: "welcome-card",
                h1 { class: "welcome-title", "Welcome to your Smart ID Card Generator" }
                p {
                    class: "welcome-subtitle",
                    "Fill in a student or employee profile, preview both sides of the card, then print or download it."
                }
                button {
                    class: "button button-primary",
                    onclick: move |_| on_create.call(()),
                    "Create ID Card"
                }
            }
        }
    }
}
