//! Field validation: pure rule checks over the current form values.
//!
//! Each field carries a fixed rule chain; the first violated rule wins and
//! produces that field's single active error message. The validator itself
//! cannot fail, it only classifies.

mod result;
mod rules;

pub use result::{ErrorSet, FieldError, ValidationResult};
pub use rules::{rules_for, Rule, RuleKind, MIN_NAME_LEN};

use crate::form::{Field, FormState};

/// Validate one field's current value. Returns the first violated rule's
/// error, if any.
pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    rules_for(field)
        .iter()
        .find(|rule| !rule.check(value))
        .map(|rule| FieldError {
            field,
            kind: rule.kind(),
            message: rule.message(field),
        })
}

/// Validate every field, in field order.
pub fn validate_all(form: &FormState) -> ValidationResult {
    let errors: Vec<FieldError> = Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, form.value(field)))
        .collect();

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(errors)
    }
}
