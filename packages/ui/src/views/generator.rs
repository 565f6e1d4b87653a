use dioxus::prelude::*;

use crate::{ActivityLogPanel, CardFormProvider, IdCardForm, IdCardPreview};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// The generator page: form on the left, live preview on the right.
///
/// The card record lives exactly as long as this view; leaving the page
/// discards it.
#[component]
pub fn GeneratorView() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        CardFormProvider {
            div {
                class: "generator",
                section {
                    class: "generator-form",
                    IdCardForm {}
                }
                section {
                    class: "generator-preview",
                    IdCardPreview {}
                }
            }
            ActivityLogPanel {}
        }
    }
}
