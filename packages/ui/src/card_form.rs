//! Card form context and hooks for the UI.
//!
//! The generator page owns one [`CardForm`] and one [`ExportState`]. They are
//! created with explicit defaults when the page mounts and dropped with it.

use card::{CardConfig, CardForm, ExportState};
use dioxus::prelude::*;

/// Get the form being edited on the current page.
pub fn use_card_form() -> Signal<CardForm> {
    use_context::<Signal<CardForm>>()
}

/// Get the export state machine for the current page.
pub fn use_export_state() -> Signal<ExportState> {
    use_context::<Signal<ExportState>>()
}

/// Get the application configuration.
pub fn use_card_config() -> CardConfig {
    use_context::<CardConfig>()
}

/// Makes `config` available to every component below it.
#[component]
pub fn CardConfigProvider(config: CardConfig, children: Element) -> Element {
    use_context_provider(move || config);

    rsx! {
        {children}
    }
}

/// Provider component that owns the page's form and export state.
/// Must sit below a [`CardConfigProvider`].
#[component]
pub fn CardFormProvider(children: Element) -> Element {
    let config = use_card_config();
    let form = use_signal(move || CardForm::new(&config.validation));
    let export_state = use_signal(ExportState::default);

    use_context_provider(|| form);
    use_context_provider(|| export_state);

    rsx! {
        {children}
    }
}
