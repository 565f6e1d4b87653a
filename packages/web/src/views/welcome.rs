use dioxus::prelude::*;

use ui::views::WelcomeView;

use crate::Route;

#[component]
pub fn Welcome() -> Element {
    let nav = use_navigator();

    rsx! {
        WelcomeView {
            on_create: move |_| {
                nav.push(Route::Create {});
            },
        }
    }
}
