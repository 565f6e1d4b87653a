use dioxus::prelude::*;

use ui::views::GeneratorView;

/// Each visit starts from an empty record.
#[component]
pub fn Create() -> Element {
    rsx! {
        GeneratorView {}
    }
}
