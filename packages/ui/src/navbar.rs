use dioxus::prelude::*;

use crate::icons::FaIdCard;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar with the app title. Extra controls go in `children`.
#[component]
pub fn Navbar(on_home: EventHandler<()>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            button {
                class: "navbar-brand",
                onclick: move |_| on_home.call(()),
                Icon { icon: FaIdCard, width: 20, height: 20 }
                span { "Smart ID Card Generator" }
            }
            div {
                class: "navbar-actions",
                {children}
            }
        }
    }
}
