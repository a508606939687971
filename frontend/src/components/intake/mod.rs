//! Intake flow: the host provides either a property URL or a PDF of an
//! existing booklet.
//!
//! Responsibilities
//! - Validate the URL-or-PDF choice before anything touches the network.
//! - Upload a valid PDF to the extraction endpoint and cache the returned
//!   draft through the storage port.
//! - Hand off to the edit flow on success; leave state and storage untouched
//!   on failure.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::IntakeComponent;

impl Component for IntakeComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        IntakeComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
