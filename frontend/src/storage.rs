//! Draft persistence port.
//!
//! The intake and edit flows keep the working booklet under a fixed
//! localStorage key so a reload does not lose it before the host saves. Both
//! flows depend on the [`DraftStore`] trait rather than the browser global,
//! which keeps the flow logic testable on the host with [`MemoryDraftStore`].

use std::cell::RefCell;

use common::model::book::BookData;
use gloo_console::error;

/// localStorage key under which the last-known booklet is cached as JSON.
pub const BOOK_DATA_KEY: &str = "bookData";

/// Read/write access to the cached draft. Read once at mount, written once
/// per successful submit; the single UI thread serializes all access.
pub trait DraftStore {
    fn load(&self) -> Option<BookData>;
    fn save(&self, book: &BookData);
}

/// Browser-backed store over `window.localStorage`. Storage failures (quota,
/// privacy mode, corrupt JSON) are logged and treated as an absent draft.
pub struct LocalDraftStore;

impl DraftStore for LocalDraftStore {
    fn load(&self) -> Option<BookData> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(BOOK_DATA_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(book) => Some(book),
            Err(err) => {
                error!(format!("Brouillon illisible dans le stockage local: {}", err));
                None
            }
        }
    }

    fn save(&self, book: &BookData) {
        let storage = match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => storage,
            None => return,
        };
        match serde_json::to_string(book) {
            Ok(raw) => {
                if let Err(err) = storage.set_item(BOOK_DATA_KEY, &raw) {
                    error!(format!("Écriture du brouillon impossible: {:?}", err));
                }
            }
            Err(err) => error!(format!("Sérialisation du brouillon impossible: {}", err)),
        }
    }
}

/// In-memory store used by the host-side tests of the intake and edit flows.
#[derive(Default)]
pub struct MemoryDraftStore {
    draft: RefCell<Option<BookData>>,
}

impl DraftStore for MemoryDraftStore {
    fn load(&self) -> Option<BookData> {
        self.draft.borrow().clone()
    }

    fn save(&self, book: &BookData) {
        *self.draft.borrow_mut() = Some(book.clone());
    }
}
