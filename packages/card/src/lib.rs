//! # Card crate: domain logic for the ID card generator
//!
//! Everything here is UI-independent and unit tested. The `ui` crate binds it
//! to Dioxus components.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | The card record, user type, photo handle and the closed `Field` enum |
//! | [`validate`] | Per-field rules and the full validation pass |
//! | [`form`] | Form store: record + errors + validation gate |
//! | [`preview`] | Projection of a record into the front and back of the card |
//! | [`qr`] | SVG rendering of the QR payload |
//! | [`export`] | Print/download pipeline over an abstract browser host |
//! | [`photo`] | Lifecycle of the photo display URL |
//! | [`config`] | `idcard.toml` settings |

pub mod config;
pub mod export;
pub mod form;
pub mod models;
pub mod photo;
pub mod preview;
pub mod qr;
pub mod validate;

pub use config::{CardConfig, ExportSettings, QrSettings, ValidationSettings};
pub use export::{
    run_export, ExportError, ExportHost, ExportKind, ExportOutcome, ExportState, RasterImage,
};
pub use form::CardForm;
pub use models::{visible_fields, CardRecord, Field, PhotoRef, UserType};
pub use photo::{ObjectUrls, PhotoUrlCache};
pub use preview::{CardBack, CardFront, CardPreview, QrPayload, QrSection};
pub use validate::{validate, validate_all, FieldError, ValidationErrors};
