//! Card details form.
//!
//! Shows the fields that apply to the selected user type. Every change runs
//! the validator for that field; the Validate button runs the full pass and is
//! the only way to enable export.

use card::{visible_fields, Field, PhotoRef, UserType};
use dioxus::prelude::*;

use crate::{log_activity, use_activity_log, use_card_form, LogLevel};

#[component]
pub fn IdCardForm() -> Element {
    let mut form = use_card_form();
    let mut activity_log = use_activity_log();
    let user_type = form.read().record().user_type;

    let handle_validate = move |_| {
        let passed = form.write().validate();
        if passed {
            log_activity(&mut activity_log, LogLevel::Success, "Card details validated");
        } else {
            let count = form.read().errors().len();
            log_activity(
                &mut activity_log,
                LogLevel::Warning,
                &format!("{count} field(s) need attention"),
            );
        }
    };

    rsx! {
        form {
            class: "card-form",
            onsubmit: move |evt: FormEvent| evt.prevent_default(),
            for field in visible_fields(user_type) {
                FormField { key: "{field.dom_id()}", field }
            }
            button {
                class: "button button-primary",
                r#type: "button",
                onclick: handle_validate,
                "VALIDATE"
            }
        }
    }
}

#[component]
fn FormField(field: Field) -> Element {
    let form = use_card_form();
    let error = form.read().error(field);
    let required = !field.is_optional();

    rsx! {
        div {
            class: if error.is_some() { "form-field has-error" } else { "form-field" },
            label {
                r#for: field.dom_id(),
                "{field.label()}"
                if required {
                    span { class: "form-required", " *" }
                }
            }
            {match field {
                Field::UserType => rsx! { UserTypeSelect {} },
                Field::ProfilePhoto => rsx! { PhotoInput {} },
                _ => rsx! { TextInput { field } },
            }}
            if let Some(err) = error {
                p { class: "form-helper form-helper-error", "{err}" }
            } else if let Some(hint) = field.hint() {
                p { class: "form-helper", "{hint}" }
            }
        }
    }
}

#[component]
fn TextInput(field: Field) -> Element {
    let mut form = use_card_form();
    let value = form.read().record().text(field).to_string();
    let input_type = match field {
        Field::Email => "email",
        Field::Phone => "tel",
        Field::Link => "url",
        _ => "text",
    };

    rsx! {
        input {
            id: field.dom_id(),
            name: field.dom_id(),
            class: "form-input",
            r#type: input_type,
            value,
            maxlength: field.max_len().map(|n| n.to_string()),
            oninput: move |evt: FormEvent| form.write().set_field(field, evt.value()),
        }
    }
}

#[component]
fn UserTypeSelect() -> Element {
    let mut form = use_card_form();
    let current = form.read().record().user_type;

    rsx! {
        select {
            id: Field::UserType.dom_id(),
            name: Field::UserType.dom_id(),
            class: "form-input",
            value: current.as_str(),
            onchange: move |evt: FormEvent| form.write().set_field(Field::UserType, evt.value()),
            option { value: "", disabled: true, selected: current == UserType::Unset, "Select user type" }
            option { value: UserType::Student.as_str(), selected: current == UserType::Student, "Student" }
            option { value: UserType::Employee.as_str(), selected: current == UserType::Employee, "Employee" }
        }
    }
}

#[component]
fn PhotoInput() -> Element {
    let mut form = use_card_form();

    let handle_change = move |evt: FormEvent| async move {
        let selected = evt
            .files()
            .and_then(|engine| engine.files().into_iter().next().map(|name| (engine, name)));
        let Some((engine, file_name)) = selected else {
            tracing::debug!("Photo selection cleared");
            form.write().set_photo(None);
            return;
        };
        match engine.read_file(&file_name).await {
            Some(bytes) => {
                tracing::debug!("Selected photo {} ({} bytes)", file_name, bytes.len());
                form.write().set_photo(Some(PhotoRef::new(file_name, bytes)));
            }
            None => {
                tracing::warn!("Could not read {}", file_name);
                form.write().set_photo(None);
            }
        }
    };

    rsx! {
        input {
            id: Field::ProfilePhoto.dom_id(),
            name: Field::ProfilePhoto.dom_id(),
            class: "form-input",
            r#type: "file",
            accept: "image/*",
            onchange: handle_change,
        }
    }
}
