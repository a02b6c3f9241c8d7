//! Per-screen form controller state.
//!
//! Each form page holds one `RwSignal<FormState>`: raw field values, the
//! current validation errors, and a busy flag that gates double submits.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::util::validation::{self, FieldErrors, FormData, FormKind};

/// Key for errors not tied to a single field (backend/business failures).
pub const GENERAL_ERROR: &str = "general";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: FormData,
    pub errors: FieldErrors,
    pub busy: bool,
}

impl FormState {
    /// Start from `(field, value)` pairs.
    pub fn with_fields<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self { fields: validation::form_data(pairs), ..Self::default() }
    }

    /// Current value of `name`, or `""`.
    pub fn field(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Set a field value and clear that field's error.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_owned(), value.into());
        self.errors.remove(name);
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.errors.get(name).cloned()
    }

    pub fn set_error(&mut self, name: &str, message: impl Into<String>) {
        self.errors.insert(name.to_owned(), message.into());
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Run the registered rules for `kind`; returns true when the form is valid.
    pub fn validate(&mut self, kind: FormKind) -> bool {
        self.errors = validation::validate(kind, &self.fields);
        self.errors.is_empty()
    }

    /// Claim the busy flag for a submit. Returns false if a submit is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.errors.remove(GENERAL_ERROR);
        true
    }

    pub fn end_submit(&mut self) {
        self.busy = false;
    }

    /// End a submit with a form-level error message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.set_error(GENERAL_ERROR, message);
    }

    /// Replace all values and clear errors and busy state.
    pub fn reset(&mut self, fields: FormData) {
        *self = Self { fields, ..Self::default() };
    }
}
