//! Live two-sided card preview with print and download actions.

use card::export::{run_export, PREVIEW_ELEMENT_ID};
use card::preview::TERMS_HEADING;
use card::{CardBack, CardFront, CardPreview, ExportKind, ExportOutcome, QrSection};
use dioxus::prelude::*;

use crate::export_host::BrowserExportHost;
use crate::icons::{FaCircle, FaDownload, FaPrint, FaSpinner};
use crate::photo_url::use_photo_url;
use crate::{
    log_activity, use_activity_log, use_card_config, use_card_form, use_export_state, Icon,
    LogLevel, QrCodePreview,
};

const CARD_CSS: Asset = asset!("/assets/styling/card.css");
const NO_PROFILE: Asset = asset!("/assets/no-profile-avatar.svg");

#[component]
pub fn IdCardPreview() -> Element {
    let form = use_card_form();
    let config = use_card_config();
    let mut export_state = use_export_state();
    let mut activity_log = use_activity_log();
    let mut export_error = use_signal(|| Option::<String>::None);
    let export_settings = use_signal(move || config.export.clone());

    let preview = use_memo(move || CardPreview::from_record(form.read().record()));

    let validated = form.read().is_validated();
    let processing = export_state.read().is_processing();
    let enabled = export_state.read().can_start(validated);

    let start_export = move |kind: ExportKind| {
        spawn(async move {
            if let Err(e) = export_state.write().begin(form.peek().is_validated()) {
                log_activity(&mut activity_log, LogLevel::Warning, &e.to_string());
                return;
            }
            export_error.set(None);
            let name = form.peek().record().name.clone();
            let settings = export_settings();

            let result = run_export(&BrowserExportHost, kind, &name, &settings).await;
            export_state.write().finish();

            match result {
                Ok(ExportOutcome::Printed) => {
                    log_activity(&mut activity_log, LogLevel::Success, "Opened print preview");
                }
                Ok(ExportOutcome::Downloaded { file_name }) => {
                    log_activity(&mut activity_log, LogLevel::Success, &format!("Downloaded {file_name}"));
                }
                Err(e) => {
                    log_activity(&mut activity_log, LogLevel::Error, &format!("Export failed: {e}"));
                    export_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let CardPreview { front, back } = preview();

    rsx! {
        document::Link { rel: "stylesheet", href: CARD_CSS }
        div {
            class: "preview-pane",

            div {
                id: PREVIEW_ELEMENT_ID,
                class: "preview-sheet",
                CardFrontView { front }
                CardBackView { back }
            }

            if let Some(err) = export_error() {
                div {
                    class: "export-banner",
                    role: "alert",
                    span { "{err}" }
                    button {
                        class: "export-banner-dismiss",
                        onclick: move |_| export_error.set(None),
                        "Dismiss"
                    }
                }
            }

            div {
                class: "export-actions",
                button {
                    class: "button button-primary",
                    disabled: !enabled,
                    onclick: move |_| start_export(ExportKind::Print),
                    if processing {
                        span { class: "spin", Icon { icon: FaSpinner, width: 16, height: 16 } }
                    } else {
                        Icon { icon: FaPrint, width: 16, height: 16 }
                    }
                    "Print"
                }
                button {
                    class: "button button-primary",
                    disabled: !enabled,
                    onclick: move |_| start_export(ExportKind::Download),
                    if processing {
                        span { class: "spin", Icon { icon: FaSpinner, width: 16, height: 16 } }
                    } else {
                        Icon { icon: FaDownload, width: 16, height: 16 }
                    }
                    "Download"
                }
            }
            if !validated {
                p { class: "export-hint", "Validate the form to enable printing and downloading." }
            }
        }
    }
}

#[component]
fn CardFrontView(front: CardFront) -> Element {
    let photo_url = use_photo_url(front.photo.clone());
    let src = photo_url.unwrap_or_else(|| NO_PROFILE.to_string());

    rsx! {
        div {
            class: "card-face card-front",
            h5 { class: "card-title", "{front.title}" }
            div {
                class: "card-photo-frame",
                img { class: "card-photo", src, alt: "Profile" }
            }
            h4 { class: "card-name", "{front.full_name}" }
            h6 { class: "card-subtitle", "{front.subtitle}" }
            div {
                class: "card-id-band",
                span { "{front.id_label} : " }
                span { "{front.id_value}" }
            }
            div {
                class: "card-contact",
                div {
                    class: "card-contact-row",
                    span { "Phone: " }
                    span { "{front.phone}" }
                }
                if let Some(email) = &front.email {
                    div { class: "card-contact-row card-email", "{email}" }
                }
            }
        }
    }
}

#[component]
fn CardBackView(back: CardBack) -> Element {
    rsx! {
        div {
            class: "card-face card-back",
            div {
                class: "card-qr",
                {match &back.qr {
                    QrSection::Code(payload) => rsx! { QrCodePreview { payload: payload.clone() } },
                    QrSection::Placeholder(text) => rsx! { h5 { class: "qr-placeholder", "{text}" } },
                }}
            }
            h6 { class: "card-terms-heading", "{TERMS_HEADING}" }
            ul {
                class: "card-terms",
                for (i, term) in back.terms.iter().enumerate() {
                    li {
                        key: "{i}",
                        Icon { icon: FaCircle, width: 6, height: 6 }
                        span { "{term}" }
                    }
                }
            }
            p { class: "card-link", "{back.link}" }
        }
    }
}
