//! Update logic for the booklet editor.
//!
//! Submit re-validates the whole form; a draft is created (POST), a
//! persisted booklet is updated (PUT) with its recommendations replaced in
//! full. Failures leave the form and the cached draft exactly as they were.

use common::requests::UpdateStayRequest;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::api;
use crate::app::Route;
use crate::helpers::show_toast;

use super::messages::Msg;
use super::state::{save_target, BookEditComponent, SaveTarget, SavedOutcome};

pub fn update(
    component: &mut BookEditComponent,
    ctx: &Context<BookEditComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FieldChanged(field, value) => {
            component.form.set(field, value);
            true
        }
        Msg::RecChanged(index, field, value) => {
            if let Some(rec) = component.form.recommendations.get_mut(index) {
                rec.set(field, value);
            }
            true
        }
        Msg::AddRecommendation => {
            component.add_recommendation();
            true
        }
        Msg::RemoveRecommendation(index) => {
            component.remove_recommendation(index);
            true
        }
        Msg::Submit => {
            if component.saving {
                return false;
            }
            component.errors = None;

            let book = match component.form.validated_book() {
                Ok(book) => book,
                Err(errors) => {
                    component.errors = Some(errors);
                    return true;
                }
            };

            component.saving = true;
            let target = save_target(&book);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match &target {
                    SaveTarget::Update { id } => {
                        api::update_stay(id, &UpdateStayRequest::from_book(&book)).await
                    }
                    SaveTarget::Create => api::create_stay(&book).await,
                };
                match result {
                    Ok(saved) => link.send_message(Msg::SaveSucceeded(saved)),
                    Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                }
            });
            true
        }
        Msg::SaveSucceeded(book) => {
            match component.apply_saved(book) {
                SavedOutcome::Created { id } => {
                    show_toast("Livret créé avec succès.");
                    if let Some(navigator) = ctx.link().navigator() {
                        navigator.push(&Route::WelcomeBook { id });
                    }
                }
                SavedOutcome::Updated => {
                    show_toast("Modifications enregistrées avec succès !");
                }
            }
            true
        }
        Msg::SaveFailed(err) => {
            component.saving = false;
            show_toast(&format!("Échec de l'enregistrement du livret : {}", err));
            true
        }
    }
}
