use crate::contact::{ContactField, ContactForm, FieldErrors};

/// Form controller state: field values, per-field errors, and submission
/// progress. Kept apart from the rendering layer so every transition can be
/// exercised without a UI runtime.
///
/// Lifecycle: `edit` on each keystroke; `begin_submit` gates the network
/// call; exactly one of `submit_succeeded` / `submit_failed` resolves it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormState {
    values: ContactForm,
    field_errors: FieldErrors,
    submitting: bool,
    submit_error: Option<String>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ContactForm {
        &self.values
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.values.value(field)
    }

    pub fn field_error(&self, field: ContactField) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// True strictly between `begin_submit` and its resolution.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Form-level message for the most recent transport failure, if any.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// A keystroke: store the new value and clear that field's error.
    /// Other fields are never touched and nothing is re-validated.
    pub fn edit(&mut self, field: ContactField, value: String) {
        self.values.set(field, value);
        self.field_errors.remove(&field);
    }

    /// Validate and, if clean, enter the submitting state.
    ///
    /// Returns `false` when validation failed — the computed errors replace
    /// the current field errors and no request may be sent.
    pub fn begin_submit(&mut self) -> bool {
        let errors = self.values.validate();
        if !errors.is_empty() {
            self.field_errors = errors;
            return false;
        }
        self.submitting = true;
        self.submit_error = None;
        true
    }

    /// The request resolved successfully: back to the pristine state.
    pub fn submit_succeeded(&mut self) {
        self.values = ContactForm::default();
        self.field_errors.clear();
        self.submitting = false;
        self.submit_error = None;
    }

    /// The request failed: keep the entered values and field errors so the
    /// user's text is not lost, stop submitting, and surface the failure.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.submit_error = Some(message.into());
    }
}
