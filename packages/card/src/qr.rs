//! QR code rendering for the back of the card.
//!
//! Encodes a [`QrPayload`] at error-correction level H and renders it as an
//! inline SVG element, sized and coloured from [`QrSettings`].

use std::sync::LazyLock;

use qrcode::render::svg;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};
use regex::Regex;

use crate::config::QrSettings;
use crate::preview::QrPayload;

static SIZE_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\b(width|height)="\d+""#).expect("valid size regex"));

/// Render the payload as an `<svg>` element, without the XML prolog so it
/// can be inlined into HTML.
///
/// The code is drawn one unit per module with no quiet zone and scaled
/// through the `viewBox`, so the element is exactly `settings.size` pixels
/// square whatever the payload length.
pub fn render_svg(payload: &QrPayload, settings: &QrSettings) -> Result<String, QrError> {
    let code = QrCode::with_error_correction_level(payload.encoded_text().as_bytes(), EcLevel::H)?;
    let modules = code.width();
    let image = code
        .render::<svg::Color>()
        .quiet_zone(false)
        .module_dimensions(1, 1)
        .dark_color(svg::Color(&settings.foreground))
        .light_color(svg::Color(&settings.background))
        .build();
    let image = match image.find("<svg") {
        Some(start) => &image[start..],
        None => image.as_str(),
    };
    let Some(tag_end) = image.find('>') else {
        return Ok(image.to_string());
    };
    let (tag, body) = image.split_at(tag_end);

    let size = settings.size;
    let mut tag = SIZE_ATTR_RE
        .replace_all(tag, |caps: &regex::Captures| format!(r#"{}="{size}""#, &caps[1]))
        .into_owned();
    if !tag.contains("viewBox") {
        tag.push_str(&format!(r#" viewBox="0 0 {modules} {modules}""#));
    }
    Ok(tag + body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> QrPayload {
        QrPayload {
            name: "Asha Rao".to_string(),
            id: "S100".to_string(),
        }
    }

    #[test]
    fn test_svg_is_inline_element() {
        let svg = render_svg(&payload(), &QrSettings::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains("<?xml"));
        assert!(svg.contains("#960756"));
        assert!(svg.contains("#ffffff"));
        assert!(svg.contains(r#"width="200""#));
        assert!(svg.contains(r#"height="200""#));
    }

    #[test]
    fn test_fixed_size_for_any_payload() {
        let short = render_svg(&payload(), &QrSettings::default()).unwrap();
        let long = render_svg(
            &QrPayload {
                name: "Asha Rao Venkataraman".to_string(),
                id: "EMP-2024-000123".to_string(),
            },
            &QrSettings::default(),
        )
        .unwrap();

        for svg in [&short, &long] {
            let tag = &svg[..svg.find('>').unwrap()];
            assert!(tag.contains(r#"width="200""#), "{tag}");
            assert!(tag.contains(r#"height="200""#), "{tag}");
            assert!(tag.contains("viewBox"), "{tag}");
        }
    }

    #[test]
    fn test_view_box_spans_modules_without_margin() {
        let code = QrCode::with_error_correction_level(b"Asha Rao-S100", EcLevel::H).unwrap();
        let n = code.width();
        let svg = render_svg(&payload(), &QrSettings::default()).unwrap();
        assert!(svg.contains(&format!(r#"viewBox="0 0 {n} {n}""#)));
    }

    #[test]
    fn test_configured_size() {
        let settings = QrSettings {
            size: 128,
            ..QrSettings::default()
        };
        let svg = render_svg(&payload(), &settings).unwrap();
        assert!(svg.contains(r#"width="128""#));
        assert!(!svg.contains(r#"width="200""#));
    }

    #[test]
    fn test_custom_colours() {
        let settings = QrSettings {
            foreground: "#000000".to_string(),
            ..QrSettings::default()
        };
        let svg = render_svg(&payload(), &settings).unwrap();
        assert!(svg.contains("#000000"));
        assert!(!svg.contains("#960756"));
    }
}
