use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The three user-entered fields of the contact form.
///
/// Inputs dispatch edits with an explicit variant rather than routing through
/// the DOM `name` attribute, so a mistyped binding fails at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// All fields in validation order.
pub const ALL_FIELDS: &[ContactField] = &[
    ContactField::Name,
    ContactField::Email,
    ContactField::Message,
];

impl ContactField {
    /// Internal key used for element ids and the wire body.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    /// Human-readable name for display in UI.
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    /// Message shown under the field when it is empty on submit.
    pub fn required_message(&self) -> &'static str {
        match self {
            ContactField::Name => "Name is required",
            ContactField::Email => "Email is required",
            ContactField::Message => "Message is required",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages; absence of a key means "no error".
pub type FieldErrors = HashMap<ContactField, String>;

/// The current text of the three user-entered fields. Serializes to the JSON
/// body `{ "name": .., "email": .., "message": .. }` sent to the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Presence validation: a field whose trimmed value is empty gets its
    /// fixed message, independently of the other fields. No format checks —
    /// any non-blank email passes.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for &field in ALL_FIELDS {
            if self.value(field).trim().is_empty() {
                errors.insert(field, field.required_message().to_string());
            }
        }
        errors
    }
}
