use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::forms::error_with_message;

/// What the intake form knows about a selected file. The browser keeps the
/// bytes; validation only needs the declared media type (plus name and size
/// for display). `Serialize` because a rejected value is recorded as a
/// parameter of its validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

/// Validation schema for the intake choice: a property URL or a PDF upload.
///
/// Per-field rules run first ([`Validate::validate`]); the URL/file
/// exclusivity is a form-level invariant checked afterwards by
/// [`IntakeForm::validate_intake`], never interleaved with the per-field
/// pass. Both fields can be individually fine and still jointly invalid.
#[derive(Debug, Clone, Default, Validate)]
pub struct IntakeForm {
    pub url: String,
    #[validate(custom(function = "pdf_only", message = "Le fichier doit être au format PDF"))]
    pub file: Option<FileMeta>,
}

impl IntakeForm {
    /// Full intake validation: per-field checks, then the exclusive-choice
    /// rule. Exactly one of {non-blank URL, selected file} must hold; both
    /// violations attach their message to the `url` field.
    pub fn validate_intake(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        let has_url = !self.url.trim().is_empty();
        let has_file = self.file.is_some();
        if !has_url && !has_file {
            errors.add(
                "url",
                error_with_message(
                    "choice_required",
                    "Veuillez fournir une URL ou importer un fichier PDF",
                ),
            );
        } else if has_url && has_file {
            errors.add(
                "url",
                error_with_message(
                    "exclusive_choice",
                    "Veuillez fournir soit une URL, soit un fichier PDF, mais pas les deux",
                ),
            );
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Path of one intake field, as addressed in the error tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeField {
    Url,
    File,
}

impl IntakeField {
    pub fn name(self) -> &'static str {
        match self {
            IntakeField::Url => "url",
            IntakeField::File => "file",
        }
    }
}

fn pdf_only(file: &FileMeta) -> Result<(), ValidationError> {
    if file.mime_type != "application/pdf" {
        return Err(ValidationError::new("file_format"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::field_message;

    fn pdf_file() -> FileMeta {
        FileMeta {
            name: "livret.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size: 120_000,
        }
    }

    #[test]
    fn neither_url_nor_file_rejects_on_url_field() {
        let form = IntakeForm::default();
        let errors = form.validate_intake().unwrap_err();
        assert_eq!(
            field_message(&errors, IntakeField::Url.name()),
            Some("Veuillez fournir une URL ou importer un fichier PDF")
        );
    }

    #[test]
    fn url_alone_is_accepted() {
        let form = IntakeForm {
            url: "airbnb.com/x".to_string(),
            file: None,
        };
        assert!(form.validate_intake().is_ok());
    }

    #[test]
    fn pdf_alone_is_accepted() {
        let form = IntakeForm {
            url: String::new(),
            file: Some(pdf_file()),
        };
        assert!(form.validate_intake().is_ok());
    }

    #[test]
    fn url_and_file_together_reject_on_url_field() {
        let form = IntakeForm {
            url: "airbnb.com/x".to_string(),
            file: Some(pdf_file()),
        };
        let errors = form.validate_intake().unwrap_err();
        assert_eq!(
            field_message(&errors, IntakeField::Url.name()),
            Some("Veuillez fournir soit une URL, soit un fichier PDF, mais pas les deux")
        );
    }

    #[test]
    fn non_pdf_file_rejects_with_format_error() {
        let form = IntakeForm {
            url: String::new(),
            file: Some(FileMeta {
                name: "photo.png".to_string(),
                mime_type: "image/png".to_string(),
                size: 42,
            }),
        };
        let errors = form.validate_intake().unwrap_err();
        assert_eq!(
            field_message(&errors, IntakeField::File.name()),
            Some("Le fichier doit être au format PDF")
        );
    }

    #[test]
    fn rejected_file_is_recorded_on_the_error() {
        let form = IntakeForm {
            url: String::new(),
            file: Some(FileMeta {
                name: "photo.png".to_string(),
                mime_type: "image/png".to_string(),
                size: 42,
            }),
        };
        let errors = form.validate_intake().unwrap_err();
        match errors.errors().get(IntakeField::File.name()) {
            Some(validator::ValidationErrorsKind::Field(list)) => {
                assert_eq!(list[0].params["value"]["mime_type"], "image/png");
            }
            other => panic!("expected a field error on file, got {:?}", other),
        }
    }

    #[test]
    fn blank_url_counts_as_absent() {
        let form = IntakeForm {
            url: "   ".to_string(),
            file: None,
        };
        assert!(form.validate_intake().is_err());
    }

    #[test]
    fn non_pdf_file_does_not_trip_the_exclusivity_rule() {
        // One choice was made; only the format rule fires.
        let form = IntakeForm {
            url: String::new(),
            file: Some(FileMeta {
                name: "photo.png".to_string(),
                mime_type: "image/png".to_string(),
                size: 42,
            }),
        };
        let errors = form.validate_intake().unwrap_err();
        assert!(field_message(&errors, IntakeField::Url.name()).is_none());
    }
}
