use std::collections::HashMap;

use super::RuleKind;
use crate::form::Field;

/// A single field validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: RuleKind,
    pub message: String,
}

/// Result of validating one or more fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation, in field order.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }
}

/// The currently active validation errors, at most one per field.
#[derive(Debug, Clone, Default)]
pub struct ErrorSet {
    errors: HashMap<Field, FieldError>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field, error);
    }

    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Active errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        Field::ALL.into_iter().filter_map(|f| self.errors.get(&f))
    }
}

impl From<ValidationResult> for ErrorSet {
    fn from(result: ValidationResult) -> Self {
        let mut set = ErrorSet::new();
        if let ValidationResult::Invalid(errors) = result {
            for error in errors {
                set.insert(error);
            }
        }
        set
    }
}
