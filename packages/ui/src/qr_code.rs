use card::preview::PLACEHOLDER_QR;
use card::QrPayload;
use dioxus::prelude::*;

use crate::use_card_config;

/// Scannable QR code for the back of the card. Only re-renders when the
/// payload changes.
#[component]
pub fn QrCodePreview(payload: QrPayload) -> Element {
    let config = use_card_config();

    match card::qr::render_svg(&payload, &config.qr) {
        Ok(svg) => rsx! {
            div {
                class: "qr-code",
                title: "{payload.encoded_text()}",
                dangerous_inner_html: svg,
            }
        },
        Err(e) => {
            tracing::warn!("QR encoding failed: {}", e);
            rsx! {
                h5 { class: "qr-placeholder", "{PLACEHOLDER_QR}" }
            }
        }
    }
}
