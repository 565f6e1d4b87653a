//! # Domain models for an ID card
//!
//! The card being edited is a single flat [`CardRecord`]. Fields are addressed
//! through the closed [`Field`] enum rather than by string name, so every
//! match over fields (validation, rendering, writes) is checked for
//! exhaustiveness by the compiler.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserType`] | Who the card is for: student, employee, or not chosen yet. Drives which fields apply. |
//! | [`PhotoRef`] | An opaque handle to a user-selected image. Equality is by identity, not by content. |
//! | [`CardRecord`] | The complete in-progress card. Optional text fields use the empty string for "not provided". |
//! | [`Field`] | Identifier for every form field, with its label, DOM id and input limits. |

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Who the card is issued to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UserType {
    Student,
    Employee,
    #[default]
    Unset,
}

impl UserType {
    /// Parse the value of the user-type select. Anything unknown is `Unset`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "student" => UserType::Student,
            "employee" => UserType::Employee,
            _ => UserType::Unset,
        }
    }

    /// The select option value, empty for `Unset`.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Employee => "employee",
            UserType::Unset => "",
        }
    }

    pub fn is_student(&self) -> bool {
        matches!(self, UserType::Student)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static NEXT_PHOTO_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to a user-selected profile image.
///
/// Each call to [`PhotoRef::new`] gets a fresh id, so re-selecting the same
/// file still counts as a change. Cloning shares the bytes.
#[derive(Clone)]
pub struct PhotoRef {
    id: u64,
    file_name: String,
    mime: String,
    bytes: Arc<[u8]>,
}

impl PhotoRef {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_from_file_name(&file_name).to_string();
        Self {
            id: NEXT_PHOTO_ID.fetch_add(1, Ordering::Relaxed),
            file_name,
            mime,
            bytes: bytes.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for PhotoRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PhotoRef {}

impl fmt::Debug for PhotoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoRef")
            .field("id", &self.id)
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Guess an image MIME type from a file extension.
pub fn mime_from_file_name(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// The card being edited.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardRecord {
    pub name: String,
    pub user_type: UserType,
    pub company_name: String,
    pub institute_name: String,
    pub department: String,
    pub designation: String,
    pub student_id: String,
    pub employee_id: String,
    pub email: String,
    pub phone: String,
    pub term1: String,
    pub term2: String,
    pub link: String,
    pub profile_photo: Option<PhotoRef>,
    pub division: String,
}

impl CardRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text value of a field. `UserType` yields its option value, the photo
    /// yields its file name.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::UserType => self.user_type.as_str(),
            Field::CompanyName => &self.company_name,
            Field::InstituteName => &self.institute_name,
            Field::Department => &self.department,
            Field::Designation => &self.designation,
            Field::StudentId => &self.student_id,
            Field::EmployeeId => &self.employee_id,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Term1 => &self.term1,
            Field::Term2 => &self.term2,
            Field::Link => &self.link,
            Field::ProfilePhoto => self
                .profile_photo
                .as_ref()
                .map(PhotoRef::file_name)
                .unwrap_or(""),
            Field::Division => &self.division,
        }
    }

    /// Write a text value into a field. Returns `false` for the photo field,
    /// which only accepts a [`PhotoRef`] through [`CardRecord::set_photo`].
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = match field {
            Field::Name => &mut self.name,
            Field::UserType => {
                self.user_type = UserType::parse(&value);
                return true;
            }
            Field::CompanyName => &mut self.company_name,
            Field::InstituteName => &mut self.institute_name,
            Field::Department => &mut self.department,
            Field::Designation => &mut self.designation,
            Field::StudentId => &mut self.student_id,
            Field::EmployeeId => &mut self.employee_id,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Term1 => &mut self.term1,
            Field::Term2 => &mut self.term2,
            Field::Link => &mut self.link,
            Field::ProfilePhoto => return false,
            Field::Division => &mut self.division,
        };
        *slot = value;
        true
    }

    pub fn set_photo(&mut self, photo: Option<PhotoRef>) {
        self.profile_photo = photo;
    }

    /// The identifier selected by the user type. Anything but a student
    /// reads the employee id.
    pub fn active_id(&self) -> &str {
        if self.user_type.is_student() {
            &self.student_id
        } else {
            &self.employee_id
        }
    }
}

/// Every field of the card form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    UserType,
    CompanyName,
    InstituteName,
    Department,
    Designation,
    StudentId,
    EmployeeId,
    Email,
    Phone,
    Term1,
    Term2,
    Link,
    ProfilePhoto,
    Division,
}

impl Field {
    pub const ALL: [Field; 15] = [
        Field::Name,
        Field::UserType,
        Field::CompanyName,
        Field::InstituteName,
        Field::Department,
        Field::Designation,
        Field::StudentId,
        Field::EmployeeId,
        Field::Email,
        Field::Phone,
        Field::Term1,
        Field::Term2,
        Field::Link,
        Field::ProfilePhoto,
        Field::Division,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::UserType => "User Type",
            Field::CompanyName => "Company Name",
            Field::InstituteName => "Institute Name",
            Field::Department => "Department",
            Field::Designation => "Designation",
            Field::StudentId => "Student ID",
            Field::EmployeeId => "Employee ID",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Term1 => "Term 1",
            Field::Term2 => "Term 2",
            Field::Link => "Official Link",
            Field::ProfilePhoto => "Profile Photo",
            Field::Division => "Division",
        }
    }

    /// DOM id of the input element.
    pub fn dom_id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::UserType => "user-type",
            Field::CompanyName => "company-name",
            Field::InstituteName => "institute-name",
            Field::Department => "department",
            Field::Designation => "designation",
            Field::StudentId => "student-id",
            Field::EmployeeId => "employee-id",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Term1 => "term1",
            Field::Term2 => "term2",
            Field::Link => "link",
            Field::ProfilePhoto => "profile-photo",
            Field::Division => "division",
        }
    }

    /// Input `maxlength`, if the field has one.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            Field::Name => Some(50),
            Field::CompanyName | Field::InstituteName => Some(60),
            Field::Designation | Field::StudentId | Field::EmployeeId => Some(30),
            Field::Email | Field::Term1 => Some(100),
            _ => None,
        }
    }

    /// Helper text shown under the input when there is no error.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Field::Phone => Some("10-15 digits"),
            Field::Link => Some("Include http:// or https://"),
            _ => None,
        }
    }

    /// Free-text fields that are never validated.
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            Field::Term1 | Field::Term2 | Field::Link | Field::Department
        )
    }

    /// Whether the form shows this field for the given user type.
    pub fn applies_to(&self, user_type: UserType) -> bool {
        match self {
            Field::CompanyName | Field::Designation | Field::EmployeeId | Field::Email => {
                user_type == UserType::Employee
            }
            Field::Division | Field::StudentId | Field::InstituteName => {
                user_type == UserType::Student
            }
            Field::Department => false,
            Field::Name
            | Field::UserType
            | Field::Phone
            | Field::Term1
            | Field::Term2
            | Field::Link
            | Field::ProfilePhoto => true,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields shown for a user type, in form order.
pub fn visible_fields(user_type: UserType) -> Vec<Field> {
    const FORM_ORDER: [Field; 14] = [
        Field::Name,
        Field::UserType,
        Field::CompanyName,
        Field::Division,
        Field::Designation,
        Field::StudentId,
        Field::EmployeeId,
        Field::InstituteName,
        Field::Email,
        Field::Phone,
        Field::Term1,
        Field::Term2,
        Field::Link,
        Field::ProfilePhoto,
    ];
    FORM_ORDER
        .into_iter()
        .filter(|field| field.applies_to(user_type))
        .collect()
}
