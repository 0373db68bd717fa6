// File: src/error_state.rs
// Purpose: Per-form view of field error messages

use crm_validation_core::FormValidation;

/// Field name → current error message, in form field order.
///
/// A field without an entry (or with an empty message) shows no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrorState {
    errors: Vec<(String, String)>,
}

impl FormErrorState {
    /// Create empty error state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error for a field; an empty message clears it
    pub fn set(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.clear(field);
            return;
        }
        match self.errors.iter_mut().find(|(name, _)| name == field) {
            Some((_, existing)) => *existing = message,
            None => self.errors.push((field.to_string(), message)),
        }
    }

    pub fn clear(&mut self, field: &str) {
        self.errors.retain(|(name, _)| name != field);
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    /// Check if field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Get error message for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    /// The error shown for the earliest field in form order
    pub fn first(&self) -> Option<(&str, &str)> {
        self.errors
            .first()
            .map(|(name, message)| (name.as_str(), message.as_str()))
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(name, message)| (name.as_str(), message.as_str()))
    }
}

impl From<FormValidation> for FormErrorState {
    fn from(validation: FormValidation) -> Self {
        let mut state = Self::new();
        for (field, message) in validation.errors {
            state.set(&field, message);
        }
        state
    }
}
