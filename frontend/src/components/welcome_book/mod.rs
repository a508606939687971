//! Guest view: read-only rendering of one booklet, behind an optional
//! password gate.
//!
//! Responsibilities
//! - Probe the record on first render without a password; a 401 opens the
//!   password prompt instead of the booklet.
//! - Drive the state machine in [`state`]: Verifying, Unauthenticated,
//!   Loaded, NotFound, Error.
//! - The single fetch is never cancelled; a response that lands after the
//!   guest navigated away is dropped with the component's scope.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::WelcomeBookProps;
pub use state::WelcomeBookComponent;

impl Component for WelcomeBookComponent {
    type Message = Msg;
    type Properties = WelcomeBookProps;

    fn create(_ctx: &Context<Self>) -> Self {
        WelcomeBookComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let id = ctx.props().id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::fetch_stay(&id, None).await;
                link.send_message(Msg::FetchResolved {
                    result,
                    with_password: false,
                });
            });
        }
    }
}
