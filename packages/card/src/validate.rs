//! Field-level validation rules.
//!
//! [`validate`] checks one field of a record and [`validate_all`] runs every
//! required field, returning the aggregated [`ValidationErrors`]. Required-ness
//! is checked on the trimmed value; format checks run on the raw value.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CardRecord, Field, UserType};

pub const NAME_MAX_LEN: usize = 50;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,15}$").expect("valid phone regex"));

/// Why a field is invalid. `Display` is the message shown under the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be 50 characters or less")]
    NameTooLong,
    #[error("User type is required")]
    UserTypeRequired,
    #[error("Company name is required for employees")]
    CompanyNameRequired,
    #[error("Division is required for students")]
    DivisionRequired,
    #[error("Designation is required for employees")]
    DesignationRequired,
    #[error("Student ID is required")]
    StudentIdRequired,
    #[error("Employee ID is required")]
    EmployeeIdRequired,
    #[error("Institute name is required")]
    InstituteNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    EmailInvalid,
    #[error("Phone is required")]
    PhoneRequired,
    #[error("Phone must be 10-15 digits")]
    PhoneInvalid,
    #[error("Profile photo is required")]
    ProfilePhotoRequired,
}

/// Current errors keyed by field. A missing key means valid or not yet checked.
pub type ValidationErrors = BTreeMap<Field, FieldError>;

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn required_for(
    record: &CardRecord,
    user_type: UserType,
    value: &str,
    error: FieldError,
) -> Option<FieldError> {
    (record.user_type == user_type && blank(value)).then_some(error)
}

/// Check a single field of `record`.
pub fn validate(field: Field, record: &CardRecord) -> Option<FieldError> {
    match field {
        Field::Name => {
            if blank(&record.name) {
                Some(FieldError::NameRequired)
            } else if record.name.chars().count() > NAME_MAX_LEN {
                Some(FieldError::NameTooLong)
            } else {
                None
            }
        }
        Field::UserType => {
            (record.user_type == UserType::Unset).then_some(FieldError::UserTypeRequired)
        }
        Field::CompanyName => required_for(
            record,
            UserType::Employee,
            &record.company_name,
            FieldError::CompanyNameRequired,
        ),
        Field::Division => required_for(
            record,
            UserType::Student,
            &record.division,
            FieldError::DivisionRequired,
        ),
        Field::Designation => required_for(
            record,
            UserType::Employee,
            &record.designation,
            FieldError::DesignationRequired,
        ),
        Field::StudentId => required_for(
            record,
            UserType::Student,
            &record.student_id,
            FieldError::StudentIdRequired,
        ),
        Field::EmployeeId => required_for(
            record,
            UserType::Employee,
            &record.employee_id,
            FieldError::EmployeeIdRequired,
        ),
        Field::InstituteName => required_for(
            record,
            UserType::Student,
            &record.institute_name,
            FieldError::InstituteNameRequired,
        ),
        Field::Email => {
            if record.user_type != UserType::Employee {
                None
            } else if blank(&record.email) {
                Some(FieldError::EmailRequired)
            } else if !EMAIL_RE.is_match(&record.email) {
                Some(FieldError::EmailInvalid)
            } else {
                None
            }
        }
        Field::Phone => {
            if blank(&record.phone) {
                Some(FieldError::PhoneRequired)
            } else if !PHONE_RE.is_match(&record.phone) {
                Some(FieldError::PhoneInvalid)
            } else {
                None
            }
        }
        Field::ProfilePhoto => record
            .profile_photo
            .is_none()
            .then_some(FieldError::ProfilePhotoRequired),
        Field::Term1 | Field::Term2 | Field::Link | Field::Department => None,
    }
}

/// Run every non-optional field and collect the failures.
pub fn validate_all(record: &CardRecord) -> ValidationErrors {
    Field::ALL
        .into_iter()
        .filter(|field| !field.is_optional())
        .filter_map(|field| validate(field, record).map(|error| (field, error)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhotoRef;

    fn student() -> CardRecord {
        CardRecord {
            name: "Asha Rao".to_string(),
            user_type: UserType::Student,
            student_id: "S100".to_string(),
            institute_name: "ABC College".to_string(),
            division: "CSE-A".to_string(),
            phone: "9876543210".to_string(),
            profile_photo: Some(PhotoRef::new("asha.png", vec![0x89, 0x50])),
            ..CardRecord::default()
        }
    }

    fn employee() -> CardRecord {
        CardRecord {
            name: "Ravi Kumar".to_string(),
            user_type: UserType::Employee,
            company_name: "Acme Corp".to_string(),
            designation: "Engineer".to_string(),
            employee_id: "E42".to_string(),
            email: "ravi@acme.com".to_string(),
            phone: "0123456789012".to_string(),
            profile_photo: Some(PhotoRef::new("ravi.jpg", vec![0xff, 0xd8])),
            ..CardRecord::default()
        }
    }

    #[test]
    fn test_valid_student_has_no_errors() {
        assert!(validate_all(&student()).is_empty());
    }

    #[test]
    fn test_valid_employee_has_no_errors() {
        assert!(validate_all(&employee()).is_empty());
    }

    #[test]
    fn test_student_requires_student_fields_only() {
        let record = CardRecord {
            user_type: UserType::Student,
            ..CardRecord::default()
        };
        let errors = validate_all(&record);
        let fields: Vec<Field> = errors.keys().copied().collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::InstituteName,
                Field::StudentId,
                Field::Phone,
                Field::ProfilePhoto,
                Field::Division,
            ]
        );
        assert!(!errors.contains_key(&Field::CompanyName));
        assert!(!errors.contains_key(&Field::Designation));
        assert!(!errors.contains_key(&Field::EmployeeId));
        assert!(!errors.contains_key(&Field::Email));
    }

    #[test]
    fn test_employee_requires_employee_fields_only() {
        let record = CardRecord {
            user_type: UserType::Employee,
            ..CardRecord::default()
        };
        let errors = validate_all(&record);
        assert_eq!(errors.get(&Field::CompanyName), Some(&FieldError::CompanyNameRequired));
        assert_eq!(errors.get(&Field::Designation), Some(&FieldError::DesignationRequired));
        assert_eq!(errors.get(&Field::EmployeeId), Some(&FieldError::EmployeeIdRequired));
        assert_eq!(errors.get(&Field::Email), Some(&FieldError::EmailRequired));
        assert!(!errors.contains_key(&Field::Division));
        assert!(!errors.contains_key(&Field::StudentId));
        assert!(!errors.contains_key(&Field::InstituteName));
    }

    #[test]
    fn test_unset_user_type_is_an_error() {
        let errors = validate_all(&CardRecord::default());
        assert_eq!(errors.get(&Field::UserType), Some(&FieldError::UserTypeRequired));
        assert_eq!(
            FieldError::UserTypeRequired.to_string(),
            "User type is required"
        );
    }

    #[test]
    fn test_name_rules() {
        let mut record = student();
        record.name = "   ".to_string();
        assert_eq!(validate(Field::Name, &record), Some(FieldError::NameRequired));

        record.name = "a".repeat(50);
        assert_eq!(validate(Field::Name, &record), None);

        record.name = "a".repeat(51);
        assert_eq!(validate(Field::Name, &record), Some(FieldError::NameTooLong));
    }

    #[test]
    fn test_email_format() {
        let mut record = employee();
        for bad in ["plainaddress", "a@b", "a b@c.com", "@c.com", "a@@c.com"] {
            record.email = bad.to_string();
            assert_eq!(
                validate(Field::Email, &record),
                Some(FieldError::EmailInvalid),
                "{bad} should be rejected"
            );
        }
        record.email = "first.last@sub.example.org".to_string();
        assert_eq!(validate(Field::Email, &record), None);

        // Students are never asked for an email
        let mut record = student();
        record.email = "not an email".to_string();
        assert_eq!(validate(Field::Email, &record), None);
    }

    #[test]
    fn test_phone_format() {
        let mut record = student();
        for good in ["1234567890", "123456789012345"] {
            record.phone = good.to_string();
            assert_eq!(validate(Field::Phone, &record), None, "{good} should pass");
        }
        for bad in ["123456789", "1234567890123456", "98765abcde", "+919876543210", "98765-43210"] {
            record.phone = bad.to_string();
            assert_eq!(
                validate(Field::Phone, &record),
                Some(FieldError::PhoneInvalid),
                "{bad} should be rejected"
            );
        }
        record.phone = String::new();
        assert_eq!(validate(Field::Phone, &record), Some(FieldError::PhoneRequired));
    }

    #[test]
    fn test_short_phone_is_the_only_error() {
        let mut record = student();
        record.phone = "12345".to_string();
        let errors = validate_all(&record);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&Field::Phone).map(ToString::to_string),
            Some("Phone must be 10-15 digits".to_string())
        );
    }

    #[test]
    fn test_optional_fields_are_ignored() {
        let mut record = student();
        record.term1 = "x".repeat(500);
        record.link = "not a url".to_string();
        assert!(validate_all(&record).is_empty());
        assert_eq!(validate(Field::Link, &record), None);
    }

    #[test]
    fn test_missing_photo() {
        let mut record = employee();
        record.profile_photo = None;
        assert_eq!(
            validate(Field::ProfilePhoto, &record),
            Some(FieldError::ProfilePhotoRequired)
        );
    }
}
