//! Update logic for the guest view.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::{validate_password, ViewState, WelcomeBookComponent};

pub fn update(
    component: &mut WelcomeBookComponent,
    ctx: &Context<WelcomeBookComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::PasswordChanged(value) => {
            component.password_input = value;
            true
        }
        Msg::SubmitPassword => {
            let password = match validate_password(&component.password_input) {
                Ok(password) => password,
                Err(message) => {
                    component.state = ViewState::Unauthenticated {
                        error: Some(message.to_string()),
                    };
                    return true;
                }
            };

            component.state = ViewState::Verifying;
            let id = ctx.props().id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::fetch_stay(&id, Some(&password)).await;
                link.send_message(Msg::FetchResolved {
                    result,
                    with_password: true,
                });
            });
            true
        }
        Msg::FetchResolved {
            result,
            with_password,
        } => {
            component.apply_fetch(result, with_password);
            true
        }
    }
}
