//! Validation error types

use crate::state::FieldName;
use std::collections::btree_map::{self, BTreeMap};
use thiserror::Error;

/// A single failing field and the message shown next to it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Active field-level failures, at most one message per field.
///
/// Rebuilt from scratch on every submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. The first message recorded for a field is kept.
    pub fn insert(&mut self, error: FieldValidationError) {
        self.0.entry(error.field).or_insert(error.message);
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Failing fields in form order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn fields(&self) -> btree_map::Keys<'_, FieldName, String> {
        self.0.keys()
    }
}

impl From<FieldValidationError> for ErrorMap {
    fn from(error: FieldValidationError) -> Self {
        let mut map = ErrorMap::new();
        map.insert(error);
        map
    }
}

impl FromIterator<FieldValidationError> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = FieldValidationError>>(iter: I) -> Self {
        let mut map = ErrorMap::new();
        for error in iter {
            map.insert(error);
        }
        map
    }
}
