//! Update logic for the intake flow.
//!
//! Submit validates the URL-or-PDF choice first; nothing reaches the network
//! on a validation failure. The PDF path uploads and waits for the extracted
//! draft; the URL path is accepted by validation but not wired to any
//! backend call yet.

use common::forms::intake::FileMeta;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::api;
use crate::app::Route;
use crate::helpers::show_toast;
use crate::storage::DraftStore;

use super::messages::Msg;
use super::state::IntakeComponent;

pub fn update(component: &mut IntakeComponent, ctx: &Context<IntakeComponent>, msg: Msg) -> bool {
    match msg {
        Msg::UrlChanged(url) => {
            component.url = url;
            true
        }
        Msg::FileSelected(file) => {
            component.file_meta = Some(FileMeta {
                name: file.name(),
                mime_type: file.type_(),
                size: file.size() as u64,
            });
            component.file = Some(file);
            true
        }
        Msg::FileCleared => {
            component.file = None;
            component.file_meta = None;
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            component.errors = None;

            if let Err(errors) = component.form().validate_intake() {
                component.errors = Some(errors);
                return true;
            }

            match &component.file {
                Some(file) => {
                    component.submitting = true;
                    let file = file.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match api::extract_pdf(&file).await {
                            Ok(book) => link.send_message(Msg::ExtractionSucceeded(book)),
                            Err(err) => link.send_message(Msg::ExtractionFailed(err.to_string())),
                        }
                    });
                    true
                }
                None => {
                    // TODO: wire the URL path to a backend extraction endpoint
                    // once one exists; for now the host lands on an empty form.
                    if let Some(navigator) = ctx.link().navigator() {
                        navigator.push(&Route::EditBook);
                    }
                    false
                }
            }
        }
        Msg::ExtractionSucceeded(book) => {
            component.submitting = false;
            component.store.save(&book);
            show_toast("Livret extrait du PDF avec succès.");
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::EditBook);
            }
            true
        }
        Msg::ExtractionFailed(err) => {
            component.submitting = false;
            show_toast(&format!("Échec de l'analyse du PDF : {}", err));
            true
        }
    }
}
