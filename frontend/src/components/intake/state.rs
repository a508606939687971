//! State for the intake form.

use common::forms::intake::{FileMeta, IntakeForm};
use validator::ValidationErrors;

use crate::storage::{DraftStore, LocalDraftStore};

pub struct IntakeComponent {
    /// Current value of the URL input.
    pub url: String,

    /// The selected file handle, kept for the eventual upload.
    pub file: Option<web_sys::File>,

    /// Metadata of the selected file, mirrored for validation and display.
    pub file_meta: Option<FileMeta>,

    /// Errors from the last failed submit, addressed by field path.
    pub errors: Option<ValidationErrors>,

    /// True while the PDF upload is in flight; disables the submit button.
    pub submitting: bool,

    /// Where the extracted draft gets cached on success.
    pub store: Box<dyn DraftStore>,
}

impl IntakeComponent {
    pub fn new() -> Self {
        Self::with_store(Box::new(LocalDraftStore))
    }

    pub fn with_store(store: Box<dyn DraftStore>) -> Self {
        Self {
            url: String::new(),
            file: None,
            file_meta: None,
            errors: None,
            submitting: false,
            store,
        }
    }

    /// The validation schema for the current input.
    pub fn form(&self) -> IntakeForm {
        IntakeForm {
            url: self.url.clone(),
            file: self.file_meta.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryDraftStore;

    #[test]
    fn fresh_component_fails_the_choice_validation() {
        let intake = IntakeComponent::with_store(Box::new(MemoryDraftStore::default()));
        assert!(intake.form().validate_intake().is_err());
    }

    #[test]
    fn selected_pdf_metadata_flows_into_the_schema() {
        let mut intake = IntakeComponent::with_store(Box::new(MemoryDraftStore::default()));
        intake.file_meta = Some(FileMeta {
            name: "livret.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size: 2048,
        });
        assert!(intake.form().validate_intake().is_ok());
    }
}
