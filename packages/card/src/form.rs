//! The form record store.
//!
//! [`CardForm`] owns the record being edited, the current per-field errors and
//! the validation gate. Every write validates the candidate value first and
//! then stores it, even when invalid, so the user can see and fix it.

use crate::config::ValidationSettings;
use crate::models::{CardRecord, Field, PhotoRef};
use crate::validate::{validate, validate_all, FieldError, ValidationErrors};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardForm {
    record: CardRecord,
    errors: ValidationErrors,
    validated: bool,
    revalidate_after_edit: bool,
}

impl CardForm {
    pub fn new(settings: &ValidationSettings) -> Self {
        Self {
            revalidate_after_edit: settings.revalidate_after_edit,
            ..Self::default()
        }
    }

    pub fn record(&self) -> &CardRecord {
        &self.record
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Whether the last full validation passed. Gates export.
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    /// Validate and store a text value. The photo field is ignored here.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let mut candidate = self.record.clone();
        if !candidate.set_text(field, value) {
            tracing::debug!("Ignoring text write to {:?}", field);
            return;
        }
        self.commit(field, candidate);
    }

    /// Validate and store the profile photo.
    pub fn set_photo(&mut self, photo: Option<PhotoRef>) {
        let mut candidate = self.record.clone();
        candidate.set_photo(photo);
        self.commit(Field::ProfilePhoto, candidate);
    }

    fn commit(&mut self, field: Field, candidate: CardRecord) {
        match validate(field, &candidate) {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
        self.record = candidate;
        if self.revalidate_after_edit {
            self.validated = false;
        }
    }

    /// Run the full validation pass. Replaces the error set and opens the
    /// gate when nothing failed. A failed pass leaves an already open gate
    /// as it was.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_all(&self.record);
        let passed = self.errors.is_empty();
        if passed {
            self.validated = true;
        }
        passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserType;

    fn fill_student(form: &mut CardForm) {
        form.set_field(Field::Name, "Asha Rao");
        form.set_field(Field::UserType, "student");
        form.set_field(Field::StudentId, "S100");
        form.set_field(Field::InstituteName, "ABC College");
        form.set_field(Field::Division, "CSE-A");
        form.set_field(Field::Phone, "9876543210");
        form.set_photo(Some(PhotoRef::new("asha.png", vec![1])));
    }

    #[test]
    fn test_invalid_value_is_stored_with_error() {
        let mut form = CardForm::default();
        form.set_field(Field::Phone, "12ab");
        assert_eq!(form.record().phone, "12ab");
        assert_eq!(form.error(Field::Phone), Some(FieldError::PhoneInvalid));

        form.set_field(Field::Phone, "9876543210");
        assert_eq!(form.error(Field::Phone), None);
    }

    #[test]
    fn test_field_checked_against_current_user_type() {
        let mut form = CardForm::default();
        form.set_field(Field::CompanyName, "");
        assert_eq!(form.error(Field::CompanyName), None);

        form.set_field(Field::UserType, "employee");
        form.set_field(Field::CompanyName, "  ");
        assert_eq!(
            form.error(Field::CompanyName),
            Some(FieldError::CompanyNameRequired)
        );
    }

    #[test]
    fn test_gate_opens_only_on_clean_pass() {
        let mut form = CardForm::default();
        assert!(!form.validate());
        assert!(!form.is_validated());
        assert!(form.errors().contains_key(&Field::Name));

        fill_student(&mut form);
        assert!(form.validate());
        assert!(form.is_validated());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_gate_stays_open_after_invalid_edit() {
        let mut form = CardForm::default();
        fill_student(&mut form);
        assert!(form.validate());

        form.set_field(Field::Phone, "12345");
        assert!(form.is_validated());
        assert_eq!(form.error(Field::Phone), Some(FieldError::PhoneInvalid));

        assert!(!form.validate());
        assert!(form.is_validated());
    }

    #[test]
    fn test_gate_closes_after_edit_when_configured() {
        let mut form = CardForm::new(&ValidationSettings {
            revalidate_after_edit: true,
        });
        fill_student(&mut form);
        assert!(form.validate());

        form.set_field(Field::Term1, "Return if found");
        assert!(!form.is_validated());
        assert!(form.validate());
        assert!(form.is_validated());
    }

    #[test]
    fn test_switching_user_type_keeps_values() {
        let mut form = CardForm::default();
        fill_student(&mut form);

        form.set_field(Field::UserType, "employee");
        assert_eq!(form.record().user_type, UserType::Employee);
        assert_eq!(form.record().student_id, "S100");
        assert_eq!(form.record().division, "CSE-A");

        form.set_field(Field::UserType, "student");
        assert_eq!(form.record().student_id, "S100");
        assert_eq!(form.record().division, "CSE-A");
        assert_eq!(form.record().active_id(), "S100");
    }

    #[test]
    fn test_photo_clear_is_an_error() {
        let mut form = CardForm::default();
        form.set_photo(Some(PhotoRef::new("a.png", vec![])));
        assert_eq!(form.error(Field::ProfilePhoto), None);
        form.set_photo(None);
        assert_eq!(
            form.error(Field::ProfilePhoto),
            Some(FieldError::ProfilePhotoRequired)
        );
    }

    #[test]
    fn test_cancelled_photo_selection_clears_record() {
        let mut form = CardForm::default();
        form.set_photo(Some(PhotoRef::new("asha.png", vec![1, 2, 3])));
        assert!(form.record().profile_photo.is_some());

        form.set_photo(None);
        assert!(form.record().profile_photo.is_none());
        assert!(!form.validate());
        assert_eq!(
            form.error(Field::ProfilePhoto),
            Some(FieldError::ProfilePhotoRequired)
        );
    }
}
