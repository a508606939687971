//! Validation schemas for the host-facing forms.
//!
//! Each schema mirrors one form: [`book::BookForm`] for the booklet editor,
//! [`intake::IntakeForm`] for the URL-or-PDF intake choice. Validation runs
//! entirely client-side, before anything reaches the network boundary, and
//! produces a [`ValidationErrors`] tree addressed by field path. The typed
//! field enums ([`book::BookField`], [`book::RecField`], [`intake::IntakeField`])
//! are the only way the UI names a path, so lookups stay exhaustive.

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

pub mod book;
pub mod intake;

/// First message attached to a top-level field, if any.
pub fn field_message<'e>(errors: &'e ValidationErrors, field: &str) -> Option<&'e str> {
    match errors.errors().get(field)? {
        ValidationErrorsKind::Field(list) => list.first()?.message.as_deref(),
        _ => None,
    }
}

/// First message attached to a field of the `index`-th entry of a list field
/// (e.g. one recommendation inside `recommendations`).
pub fn item_message<'e>(
    errors: &'e ValidationErrors,
    list: &str,
    index: usize,
    field: &str,
) -> Option<&'e str> {
    match errors.errors().get(list)? {
        ValidationErrorsKind::List(items) => field_message(items.get(&index)?, field),
        _ => None,
    }
}

pub(crate) fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}
