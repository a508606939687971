use yew::prelude::*;

/// Properties of the guest view page.
#[derive(Properties, PartialEq, Clone)]
pub struct WelcomeBookProps {
    /// Booklet identifier taken from the navigation path.
    pub id: String,
}
