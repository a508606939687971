//! The guest view's state machine.
//!
//! One fetch is in flight at a time; every outcome maps onto exactly one of
//! the five states. `Loaded`, `NotFound` and `Error` are terminal for the
//! page instance; `Unauthenticated` re-prompts for the password.

use common::model::book::BookData;

use crate::api::ApiError;

pub const MSG_WRONG_PASSWORD: &str = "Mot de passe incorrect";
pub const MSG_EMPTY_PASSWORD: &str = "Veuillez saisir le mot de passe";
pub const MSG_NOT_FOUND: &str = "Livret d'hébergement introuvable.";
pub const MSG_FETCH_ERROR: &str =
    "Impossible de récupérer les données du livret. Veuillez réessayer plus tard.";
pub const MSG_LOADING: &str = "Chargement du livret d'hébergement...";

#[derive(Debug, PartialEq)]
pub enum ViewState {
    /// A fetch is in flight.
    Verifying,
    /// The booklet is protected; prompt for the password.
    Unauthenticated { error: Option<String> },
    /// The record arrived; render it read-only.
    Loaded(BookData),
    /// No booklet under that identifier.
    NotFound,
    /// Any other failure; no automatic retry.
    Error,
}

/// Maps a fetch outcome onto the next state. A 401 on the passwordless probe
/// just opens the prompt; a 401 after the guest typed a password adds the
/// wrong-password message.
pub fn resolve(result: Result<BookData, ApiError>, password_attempted: bool) -> ViewState {
    match result {
        Ok(book) => ViewState::Loaded(book),
        Err(ApiError::Unauthorized) => ViewState::Unauthenticated {
            error: password_attempted.then(|| MSG_WRONG_PASSWORD.to_string()),
        },
        Err(ApiError::NotFound) => ViewState::NotFound,
        Err(_) => ViewState::Error,
    }
}

/// Local check before any network call: a blank password is rejected inline.
pub fn validate_password(input: &str) -> Result<String, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(MSG_EMPTY_PASSWORD)
    } else {
        Ok(trimmed.to_string())
    }
}

pub struct WelcomeBookComponent {
    pub state: ViewState,
    /// Current value of the password prompt.
    pub password_input: String,
}

impl WelcomeBookComponent {
    pub fn new() -> Self {
        Self {
            state: ViewState::Verifying,
            password_input: String::new(),
        }
    }

    /// Applies a fetch outcome. Falling back to the prompt clears whatever
    /// password was typed so the guest retypes cleanly.
    pub fn apply_fetch(&mut self, result: Result<BookData, ApiError>, password_attempted: bool) {
        self.state = resolve(result, password_attempted);
        if matches!(self.state, ViewState::Unauthenticated { .. }) {
            self.password_input.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> BookData {
        BookData {
            id: Some("abc".to_string()),
            owner_name: "Jean Dupont".to_string(),
            ..BookData::default()
        }
    }

    #[test]
    fn success_loads_the_record() {
        match resolve(Ok(book()), false) {
            ViewState::Loaded(loaded) => assert_eq!(loaded.owner_name, "Jean Dupont"),
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn unauthorized_probe_opens_the_prompt_without_message() {
        assert_eq!(
            resolve(Err(ApiError::Unauthorized), false),
            ViewState::Unauthenticated { error: None }
        );
    }

    #[test]
    fn wrong_password_reprompts_with_message() {
        assert_eq!(
            resolve(Err(ApiError::Unauthorized), true),
            ViewState::Unauthenticated {
                error: Some(MSG_WRONG_PASSWORD.to_string())
            }
        );
    }

    #[test]
    fn missing_identifier_is_not_found() {
        assert_eq!(resolve(Err(ApiError::NotFound), true), ViewState::NotFound);
    }

    #[test]
    fn other_failures_are_terminal_errors() {
        assert_eq!(resolve(Err(ApiError::Server(500)), false), ViewState::Error);
        assert_eq!(
            resolve(Err(ApiError::Network("offline".to_string())), true),
            ViewState::Error
        );
    }

    #[test]
    fn wrong_password_clears_the_input_for_the_retry() {
        let mut view = WelcomeBookComponent::new();
        view.password_input = "pas-le-bon".to_string();
        view.apply_fetch(Err(ApiError::Unauthorized), true);
        assert_eq!(
            view.state,
            ViewState::Unauthenticated {
                error: Some(MSG_WRONG_PASSWORD.to_string())
            }
        );
        assert_eq!(view.password_input, "");
    }

    #[test]
    fn a_successful_fetch_keeps_nothing_from_the_prompt() {
        let mut view = WelcomeBookComponent::new();
        view.password_input = "s3cret".to_string();
        view.apply_fetch(Ok(book()), true);
        assert!(matches!(view.state, ViewState::Loaded(_)));
    }

    #[test]
    fn blank_password_is_rejected_locally() {
        assert_eq!(validate_password(""), Err(MSG_EMPTY_PASSWORD));
        assert_eq!(validate_password("   "), Err(MSG_EMPTY_PASSWORD));
    }

    #[test]
    fn password_is_trimmed_before_the_request() {
        assert_eq!(validate_password("  s3cret "), Ok("s3cret".to_string()));
    }
}
