//! # Export pipeline: print and download of the rendered card
//!
//! Exporting captures the preview subtree as a bitmap and hands it to the
//! browser, either as a print document in a new window or as a PNG download.
//! The browser side is abstracted behind [`ExportHost`], so the same flow runs
//! against the real DOM in the UI crate and against a fake host in tests.
//!
//! ## State machine
//!
//! [`ExportState`] is `Idle` or `Processing`. [`ExportState::begin`] moves to
//! `Processing` only when the form has passed validation and no export is
//! running; [`ExportState::finish`] always returns to `Idle`. The UI also
//! disables the buttons, but the state machine rejects a second start on its
//! own.
//!
//! ## Flow
//!
//! | Kind | Steps |
//! |------|-------|
//! | [`ExportKind::Print`] | settle delay → rasterize at `print_scale` → open a window with [`print_document`] |
//! | [`ExportKind::Download`] | rasterize at `download_scale` → save as [`download_file_name`] |

use std::future::Future;

use crate::config::ExportSettings;

/// DOM id of the element captured by the rasterizer.
pub const PREVIEW_ELEMENT_ID: &str = "id-card-preview";

/// File name used when the card has no name.
pub const DEFAULT_FILE_STEM: &str = "id-card";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("Validate the form before exporting")]
    NotValidated,
    #[error("An export is already in progress")]
    Busy,
    #[error("Preview element '{0}' not found")]
    MissingTarget(String),
    #[error("Popup blocked - please allow popups for this site")]
    PopupBlocked,
    #[error("Failed to capture the card: {0}")]
    Rasterize(String),
    #[error("Failed to save the image: {0}")]
    Save(String),
    #[error("Browser script failed: {0}")]
    Script(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    Print,
    Download,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Printed,
    Downloaded { file_name: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportState {
    #[default]
    Idle,
    Processing,
}

impl ExportState {
    pub fn is_processing(&self) -> bool {
        matches!(self, ExportState::Processing)
    }

    /// Whether the export buttons are enabled.
    pub fn can_start(&self, validated: bool) -> bool {
        validated && !self.is_processing()
    }

    pub fn begin(&mut self, validated: bool) -> Result<(), ExportError> {
        if !validated {
            return Err(ExportError::NotValidated);
        }
        if self.is_processing() {
            return Err(ExportError::Busy);
        }
        *self = ExportState::Processing;
        Ok(())
    }

    pub fn finish(&mut self) {
        *self = ExportState::Idle;
    }
}

/// A captured bitmap, as a `data:image/png;base64,...` URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pub data_url: String,
}

/// Browser operations the export flow needs.
pub trait ExportHost {
    /// Wait for pending DOM updates to land.
    fn settle(&self, delay_ms: u32) -> impl Future<Output = ()>;
    fn rasterize(
        &self,
        element_id: &str,
        scale: f32,
    ) -> impl Future<Output = Result<RasterImage, ExportError>>;
    /// Open a new window and write `html` into it.
    fn open_print_window(&self, html: &str) -> impl Future<Output = Result<(), ExportError>>;
    fn save_file(
        &self,
        file_name: &str,
        data_url: &str,
    ) -> impl Future<Output = Result<(), ExportError>>;
}

/// `<name>.png`, or `id-card.png` when the name is empty. The name is used
/// exactly as entered.
pub fn download_file_name(name: &str) -> String {
    let stem = if name.is_empty() { DEFAULT_FILE_STEM } else { name };
    format!("{stem}.png")
}

/// Minimal HTML page that shows the bitmap and prints itself once loaded.
pub fn print_document(image: &RasterImage, print_delay_ms: u32) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>ID Card</title>
    <style>
      body {{ margin: 0; padding: 0; }}
      img {{ max-width: 100%; height: auto; }}
    </style>
  </head>
  <body>
    <img src="{src}" />
    <script>
      window.onload = function() {{
        setTimeout(function() {{
          window.print();
          window.close();
        }}, {delay});
      }};
    </script>
  </body>
</html>"#,
        src = image.data_url,
        delay = print_delay_ms,
    )
}

/// Run one export against `host`. The caller owns the [`ExportState`] and
/// must call `begin` before and `finish` after.
pub async fn run_export<H: ExportHost>(
    host: &H,
    kind: ExportKind,
    card_name: &str,
    settings: &ExportSettings,
) -> Result<ExportOutcome, ExportError> {
    match kind {
        ExportKind::Print => {
            host.settle(settings.settle_delay_ms).await;
            let image = host
                .rasterize(PREVIEW_ELEMENT_ID, settings.print_scale)
                .await?;
            tracing::debug!("Captured card for print ({} bytes)", image.data_url.len());
            host.open_print_window(&print_document(&image, settings.print_delay_ms))
                .await?;
            Ok(ExportOutcome::Printed)
        }
        ExportKind::Download => {
            let image = host
                .rasterize(PREVIEW_ELEMENT_ID, settings.download_scale)
                .await?;
            let file_name = download_file_name(card_name);
            host.save_file(&file_name, &image.data_url).await?;
            Ok(ExportOutcome::Downloaded { file_name })
        }
    }
}
