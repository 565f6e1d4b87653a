//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod navbar;
pub use navbar::Navbar;

mod card_form;
pub use card_form::{
    use_card_config, use_card_form, use_export_state, CardConfigProvider, CardFormProvider,
};

mod id_card_form;
pub use id_card_form::IdCardForm;

mod id_card_preview;
pub use id_card_preview::IdCardPreview;

mod qr_code;
pub use qr_code::QrCodePreview;

pub mod export_host;
pub use export_host::{BrowserExportHost, HTML2CANVAS_SRC};

mod photo_url;
pub use photo_url::{use_photo_url, BlobUrls};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, use_activity_log_provider, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
