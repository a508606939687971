//! Application shell: the route table and the router-driven root component.
//!
//! Three user-facing pages: the intake form at `/`, the host editor at
//! `/owner-edit-book`, and the read-only guest view at `/welcome-book/:id`.
//! Anything else falls through to a not-found page.

use yew::{html, Component, Context, Html};
use yew_router::prelude::*;

use crate::components::book_edit::BookEditComponent;
use crate::components::intake::IntakeComponent;
use crate::components::welcome_book::WelcomeBookComponent;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/owner-edit-book")]
    EditBook,
    #[at("/welcome-book/:id")]
    WelcomeBook { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <IntakeComponent /> },
        Route::EditBook => html! { <BookEditComponent /> },
        Route::WelcomeBook { id } => html! { <WelcomeBookComponent {id} /> },
        Route::NotFound => html! {
            <div class="page-message">
                <h1>{"Page introuvable"}</h1>
            </div>
        },
    }
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        }
    }
}
