//! Validation errors for the feedback form

use super::field::FeedbackField;
use std::collections::BTreeMap;
use thiserror::Error;

/// A field-level validation failure. The display text is what the form shows inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a rating")]
    MissingRating,
    #[error("Please provide a comment")]
    EmptyComment,
}

impl ValidationError {
    /// The field this error is reported under
    pub fn field(self) -> FeedbackField {
        match self {
            ValidationError::MissingRating => FeedbackField::Rating,
            ValidationError::EmptyComment => FeedbackField::Comment,
        }
    }
}

/// Errors keyed by field. Only holds entries for fields currently failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FeedbackField, ValidationError>);

impl ValidationErrors {
    pub fn insert(&mut self, error: ValidationError) {
        self.0.insert(error.field(), error);
    }

    pub fn get(&self, field: FeedbackField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    /// Message to render under `field`, if it has an error
    pub fn message(&self, field: FeedbackField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// (field name, message) pairs in field order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        self.0
            .iter()
            .map(|(field, err)| (field.name(), err.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingRating.to_string(),
            "Please select a rating"
        );
        assert_eq!(
            ValidationError::EmptyComment.to_string(),
            "Please provide a comment"
        );
    }

    #[test]
    fn test_insert_keys_by_field() {
        let mut errors = ValidationErrors::default();
        errors.insert(ValidationError::EmptyComment);
        errors.insert(ValidationError::EmptyComment);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FeedbackField::Comment),
            Some(ValidationError::EmptyComment)
        );
        assert!(errors.get(FeedbackField::Rating).is_none());
    }

    #[test]
    fn test_entries_are_in_field_order() {
        let mut errors = ValidationErrors::default();
        errors.insert(ValidationError::EmptyComment);
        errors.insert(ValidationError::MissingRating);
        let names: Vec<_> = errors.entries().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["rating", "comment"]);
    }
}
