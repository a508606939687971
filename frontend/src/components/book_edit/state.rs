//! State and pure transitions of the booklet editor.
//!
//! Everything the edit flow decides without touching the DOM or the network
//! lives here as plain methods, so the host-side tests can drive the flow
//! with a [`MemoryDraftStore`](crate::storage::MemoryDraftStore).

use common::forms::book::{BookForm, RecommendationForm};
use common::model::book::BookData;
use uuid::Uuid;
use validator::ValidationErrors;

use crate::api;
use crate::storage::{DraftStore, LocalDraftStore};

/// Which request a submit issues: drafts are created, persisted records are
/// updated at their own path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update { id: String },
}

impl SaveTarget {
    /// Path the request goes to.
    pub fn path(&self) -> String {
        match self {
            SaveTarget::Create => "/api/stay".to_string(),
            SaveTarget::Update { id } => api::stay_url(id),
        }
    }
}

pub fn save_target(book: &BookData) -> SaveTarget {
    match (book.is_persisted(), &book.id) {
        (true, Some(id)) => SaveTarget::Update { id: id.clone() },
        _ => SaveTarget::Create,
    }
}

/// What a successful save means for navigation: a created booklet moves the
/// host to its guest view, an updated one re-seeds the form in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedOutcome {
    Created { id: String },
    Updated,
}

pub struct BookEditComponent {
    /// The editable form, seeded from the cached draft.
    pub form: BookForm,

    /// One render key per recommendation row. Rows are added and removed by
    /// position; stable keys keep the DOM diff from reusing the wrong inputs.
    pub row_keys: Vec<Uuid>,

    /// Last authoritative record from the backend (or the cached draft).
    /// Carries the access password the form never edits.
    pub book: Option<BookData>,

    /// Errors from the last failed submit, addressed by field path.
    pub errors: Option<ValidationErrors>,

    /// True while a create or update request is in flight.
    pub saving: bool,

    pub store: Box<dyn DraftStore>,
}

impl BookEditComponent {
    pub fn new() -> Self {
        Self::with_store(Box::new(LocalDraftStore))
    }

    pub fn with_store(store: Box<dyn DraftStore>) -> Self {
        Self {
            form: BookForm::default(),
            row_keys: Vec::new(),
            book: None,
            errors: None,
            saving: false,
            store,
        }
    }

    /// Seeds the form from a record, or a blank draft when `None`.
    pub fn seed(&mut self, book: Option<BookData>) {
        self.form = BookForm::from_book(book.as_ref());
        self.row_keys = self
            .form
            .recommendations
            .iter()
            .map(|_| Uuid::new_v4())
            .collect();
        self.book = book;
        self.errors = None;
    }

    pub fn seed_from_store(&mut self) {
        let cached = self.store.load();
        self.seed(cached);
    }

    /// Appends a blank recommendation row: empty name, no category selected.
    pub fn add_recommendation(&mut self) {
        self.form.recommendations.push(RecommendationForm::default());
        self.row_keys.push(Uuid::new_v4());
    }

    /// Removes the row at `index`; out-of-range positions are a no-op.
    pub fn remove_recommendation(&mut self, index: usize) {
        if index < self.form.recommendations.len() {
            self.form.recommendations.remove(index);
            self.row_keys.remove(index);
        }
    }

    /// Commits a successful save: the backend response is now authoritative.
    /// It is cached through the port and re-seeds the form, so a fresh
    /// identifier or access password shows up immediately.
    pub fn apply_saved(&mut self, book: BookData) -> SavedOutcome {
        self.saving = false;
        let was_draft = self.form.id.is_none();
        self.store.save(&book);
        let outcome = match (&book.id, was_draft) {
            (Some(id), true) => SavedOutcome::Created { id: id.clone() },
            _ => SavedOutcome::Updated,
        };
        self.seed(Some(book));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryDraftStore;
    use common::forms::book::BookField;
    use common::model::book::{Recommendation, RecommendationKind};

    fn component() -> BookEditComponent {
        BookEditComponent::with_store(Box::new(MemoryDraftStore::default()))
    }

    fn persisted_book() -> BookData {
        BookData {
            id: Some("abc123".to_string()),
            arrival_time: "15:00".to_string(),
            owner_name: "Jean Dupont".to_string(),
            access_password: Some("s3cret".to_string()),
            recommendations: vec![Recommendation {
                id: Some("r1".to_string()),
                name: "Chez Louise".to_string(),
                address: String::new(),
                description: String::new(),
                kind: RecommendationKind::Restaurant,
            }],
            ..BookData::default()
        }
    }

    #[test]
    fn seeds_blank_when_store_is_empty() {
        let mut edit = component();
        edit.seed_from_store();
        assert_eq!(edit.form.id, None);
        assert!(edit.form.recommendations.is_empty());
        assert!(edit.row_keys.is_empty());
    }

    #[test]
    fn seeds_form_and_row_keys_from_cached_draft() {
        let mut edit = component();
        edit.store.save(&persisted_book());
        edit.seed_from_store();
        assert_eq!(edit.form.id.as_deref(), Some("abc123"));
        assert_eq!(edit.form.recommendations.len(), 1);
        assert_eq!(edit.row_keys.len(), 1);
        assert_eq!(edit.form.get(BookField::OwnerName), "Jean Dupont");
    }

    #[test]
    fn add_then_remove_restores_prior_rows() {
        let mut edit = component();
        edit.seed(Some(persisted_book()));
        let before: Vec<String> = edit
            .form
            .recommendations
            .iter()
            .map(|rec| rec.name.clone())
            .collect();

        edit.add_recommendation();
        assert_eq!(edit.form.recommendations.len(), 2);
        assert_eq!(edit.form.recommendations[1].kind, None);

        edit.remove_recommendation(1);
        let after: Vec<String> = edit
            .form
            .recommendations
            .iter()
            .map(|rec| rec.name.clone())
            .collect();
        assert_eq!(after, before);
        assert_eq!(edit.row_keys.len(), 1);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut edit = component();
        edit.seed(Some(persisted_book()));
        edit.remove_recommendation(5);
        assert_eq!(edit.form.recommendations.len(), 1);
    }

    #[test]
    fn a_draft_is_saved_through_a_create_request() {
        let draft = BookData::default();
        let target = save_target(&draft);
        assert_eq!(target, SaveTarget::Create);
        assert_eq!(target.path(), "/api/stay");
    }

    #[test]
    fn a_persisted_booklet_is_saved_through_an_update_to_its_own_path() {
        let target = save_target(&persisted_book());
        assert_eq!(
            target,
            SaveTarget::Update {
                id: "abc123".to_string()
            }
        );
        assert_eq!(target.path(), "/api/stay/abc123");
    }

    #[test]
    fn first_save_reports_created_and_caches_the_identifier() {
        let mut edit = component();
        edit.seed(None);

        let mut response = persisted_book();
        response.id = Some("new-id".to_string());
        let outcome = edit.apply_saved(response);

        assert_eq!(
            outcome,
            SavedOutcome::Created {
                id: "new-id".to_string()
            }
        );
        assert_eq!(edit.store.load().unwrap().id.as_deref(), Some("new-id"));
        assert_eq!(edit.form.id.as_deref(), Some("new-id"));
        assert!(!edit.saving);
    }

    #[test]
    fn saving_a_persisted_booklet_reports_updated() {
        let mut edit = component();
        edit.seed(Some(persisted_book()));
        let outcome = edit.apply_saved(persisted_book());
        assert_eq!(outcome, SavedOutcome::Updated);
        assert_eq!(edit.book.as_ref().unwrap().id.as_deref(), Some("abc123"));
    }
}
