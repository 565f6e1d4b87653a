//! # Card preview projection
//!
//! Turns a [`CardRecord`] into the text and images shown on the two sides of
//! the card. Nothing here holds state: the UI recomputes the projection every
//! time the record changes. Empty fields fall back to placeholder text so the
//! preview always looks like a finished card.

use crate::models::{CardRecord, PhotoRef};

pub const PLACEHOLDER_INSTITUTE: &str = "Institute Name";
pub const PLACEHOLDER_COMPANY: &str = "Company Name";
pub const PLACEHOLDER_NAME: &str = "Full Name";
pub const PLACEHOLDER_DIVISION: &str = "Division";
pub const PLACEHOLDER_DESIGNATION: &str = "Designation";
pub const PLACEHOLDER_ID: &str = "N/A";
pub const PLACEHOLDER_PHONE: &str = "1234567890";
pub const PLACEHOLDER_EMAIL: &str = "your-email@example.com";
pub const PLACEHOLDER_QR: &str = "QR Code Preview";
pub const PLACEHOLDER_TERM: &str =
    "Lorem ipsum dolor sit amet consectetur adipisicing elit. Omnis, facilis.";
pub const PLACEHOLDER_LINK: &str = "https://www.companyname.com";
pub const TERMS_HEADING: &str = "Terms & Conditions";

/// The pair encoded into the back-of-card QR code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrPayload {
    pub name: String,
    pub id: String,
}

impl QrPayload {
    /// Present only when the name and the active id are both filled in.
    pub fn from_record(record: &CardRecord) -> Option<Self> {
        let name = record.name.trim();
        let id = record.active_id().trim();
        if name.is_empty() || id.is_empty() {
            return None;
        }
        Some(Self {
            name: record.name.clone(),
            id: record.active_id().to_string(),
        })
    }

    /// Text encoded in the QR image: `"<name>-<id>"`.
    pub fn encoded_text(&self) -> String {
        format!("{}-{}", self.name, self.id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardFront {
    pub title: String,
    pub photo: Option<PhotoRef>,
    pub full_name: String,
    pub subtitle: String,
    pub id_label: &'static str,
    pub id_value: String,
    pub phone: String,
    /// Only employees (and unset types) show an email line.
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum QrSection {
    Code(QrPayload),
    Placeholder(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardBack {
    pub qr: QrSection,
    pub terms: [String; 2],
    pub link: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardPreview {
    pub front: CardFront,
    pub back: CardBack,
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

impl CardFront {
    pub fn from_record(record: &CardRecord) -> Self {
        let student = record.user_type.is_student();
        let (title, subtitle) = if student {
            (
                or_placeholder(&record.institute_name, PLACEHOLDER_INSTITUTE),
                or_placeholder(&record.division, PLACEHOLDER_DIVISION),
            )
        } else {
            (
                or_placeholder(&record.company_name, PLACEHOLDER_COMPANY),
                or_placeholder(&record.designation, PLACEHOLDER_DESIGNATION),
            )
        };
        Self {
            title,
            photo: record.profile_photo.clone(),
            full_name: or_placeholder(&record.name, PLACEHOLDER_NAME),
            subtitle,
            id_label: if student { "S.ID" } else { "E.ID" },
            id_value: or_placeholder(record.active_id(), PLACEHOLDER_ID),
            phone: or_placeholder(&record.phone, PLACEHOLDER_PHONE),
            email: (!student).then(|| or_placeholder(&record.email, PLACEHOLDER_EMAIL)),
        }
    }
}

impl CardBack {
    pub fn from_record(record: &CardRecord) -> Self {
        let qr = match QrPayload::from_record(record) {
            Some(payload) => QrSection::Code(payload),
            None => QrSection::Placeholder(PLACEHOLDER_QR),
        };
        Self {
            qr,
            terms: [
                or_placeholder(&record.term1, PLACEHOLDER_TERM),
                or_placeholder(&record.term2, PLACEHOLDER_TERM),
            ],
            link: or_placeholder(&record.link, PLACEHOLDER_LINK),
        }
    }
}

impl CardPreview {
    pub fn from_record(record: &CardRecord) -> Self {
        Self {
            front: CardFront::from_record(record),
            back: CardBack::from_record(record),
        }
    }
}
