//! Booklet editor: the host reviews the draft, manages recommendations, and
//! saves.
//!
//! Responsibilities
//! - Seed the form on first render from the cached draft (blank when none).
//! - Validate on submit and keep the errors addressable per field and per
//!   recommendation row.
//! - Create the booklet on first save, update it in place afterwards; the
//!   backend response becomes the new cached draft either way.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::BookEditComponent;

impl Component for BookEditComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        // The draft cache is synchronous; seed before the first render.
        let mut component = BookEditComponent::new();
        component.seed_from_store();
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
