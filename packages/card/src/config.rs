//! # Generator configuration: `idcard.toml`
//!
//! Tunables for export timing, QR rendering and the validation gate. The web
//! crate embeds the file at build time and hands the parsed value to the UI
//! through a context.
//!
//! ## Structure
//!
//! ```toml
//! [export]
//! settle_delay_ms = 100    # wait before capturing for print
//! print_scale = 2.0
//! download_scale = 1.0
//! print_delay_ms = 200     # print() delay after the image loads
//!
//! [qr]
//! size = 200
//! foreground = "#960756"
//! background = "#ffffff"
//!
//! [validation]
//! revalidate_after_edit = false
//! ```
//!
//! Every field has a serde default, so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `idcard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub qr: QrSettings,
    #[serde(default)]
    pub validation: ValidationSettings,
}

/// Timing and scale of the export pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Delay before rasterizing for print, letting pending DOM updates land.
    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u32,
    #[serde(default = "default_print_scale")]
    pub print_scale: f32,
    #[serde(default = "default_download_scale")]
    pub download_scale: f32,
    /// Delay between the print document loading and calling `print()`.
    #[serde(default = "default_print_delay")]
    pub print_delay_ms: u32,
}

fn default_settle_delay() -> u32 {
    100
}

fn default_print_scale() -> f32 {
    2.0
}

fn default_download_scale() -> f32 {
    1.0
}

fn default_print_delay() -> u32 {
    200
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay(),
            print_scale: default_print_scale(),
            download_scale: default_download_scale(),
            print_delay_ms: default_print_delay(),
        }
    }
}

/// QR code appearance on the back of the card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QrSettings {
    /// Minimum edge length in pixels.
    #[serde(default = "default_qr_size")]
    pub size: u32,
    #[serde(default = "default_qr_foreground")]
    pub foreground: String,
    #[serde(default = "default_qr_background")]
    pub background: String,
}

fn default_qr_size() -> u32 {
    200
}

fn default_qr_foreground() -> String {
    "#960756".to_string()
}

fn default_qr_background() -> String {
    "#ffffff".to_string()
}

impl Default for QrSettings {
    fn default() -> Self {
        Self {
            size: default_qr_size(),
            foreground: default_qr_foreground(),
            background: default_qr_background(),
        }
    }
}

/// Behaviour of the validation gate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// When true, editing any field after a successful validation disables
    /// export until the form is validated again.
    #[serde(default)]
    pub revalidate_after_edit: bool,
}

impl CardConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "idcard.toml"
    }

    /// Builder method to require re-validation after edits.
    pub fn with_revalidate_after_edit(mut self, enabled: bool) -> Self {
        self.validation.revalidate_after_edit = enabled;
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, falling back to the defaults on malformed input.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid {}, using defaults: {}", Self::filename(), e);
                Self::default()
            }
        }
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = CardConfig::from_toml("").unwrap();
        assert_eq!(config, CardConfig::default());
        assert_eq!(config.export.settle_delay_ms, 100);
        assert_eq!(config.export.print_scale, 2.0);
        assert_eq!(config.export.download_scale, 1.0);
        assert_eq!(config.qr.size, 200);
        assert_eq!(config.qr.foreground, "#960756");
        assert!(!config.validation.revalidate_after_edit);
    }

    #[test]
    fn test_partial_sections() {
        let config = CardConfig::from_toml(
            r#"
            [export]
            print_scale = 3.0

            [validation]
            revalidate_after_edit = true
            "#,
        )
        .unwrap();
        assert_eq!(config.export.print_scale, 3.0);
        assert_eq!(config.export.settle_delay_ms, 100);
        assert!(config.validation.revalidate_after_edit);
        assert_eq!(config.qr, QrSettings::default());
    }

    #[test]
    fn test_malformed_falls_back() {
        let config = CardConfig::from_toml_or_default("[export]\nprint_scale = \"big\"");
        assert_eq!(config, CardConfig::default());
    }

    #[test]
    fn test_roundtrip() {
        let config = CardConfig::default().with_revalidate_after_edit(true);
        let text = config.to_toml().unwrap();
        assert_eq!(CardConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_bundled_file_parses() {
        let config = CardConfig::from_toml(include_str!("../../web/idcard.toml")).unwrap();
        assert_eq!(config, CardConfig::default());
    }
}
