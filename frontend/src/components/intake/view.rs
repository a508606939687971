//! View for the intake form: URL input, PDF picker, inline errors.

use common::forms::field_message;
use common::forms::intake::IntakeField;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::format_file_size;

use super::messages::Msg;
use super::state::IntakeComponent;

pub fn view(component: &IntakeComponent, ctx: &Context<IntakeComponent>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="intake-page">
            <h1>{"Créez le livret d'accueil de votre logement"}</h1>
            <form {onsubmit}>
                { build_url_field(component, link) }
                <div class="intake-separator">{"ou"}</div>
                { build_file_field(component, link) }
                <button type="submit" class="primary-btn" disabled={component.submitting}>
                    { if component.submitting { "Analyse du PDF…" } else { "Créer mon livret" } }
                </button>
            </form>
        </div>
    }
}

fn build_url_field(component: &IntakeComponent, link: &Scope<IntakeComponent>) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UrlChanged(input.value())
    });

    html! {
        <div class="form-field">
            <label for="intake-url">{"Adresse de votre annonce"}</label>
            <input
                id="intake-url"
                type="text"
                placeholder="https://airbnb.com/rooms/…"
                value={component.url.clone()}
                {oninput}
            />
            { error_line(component, IntakeField::Url) }
        </div>
    }
}

fn build_file_field(component: &IntakeComponent, link: &Scope<IntakeComponent>) -> Html {
    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        match input.files().and_then(|files| files.get(0)) {
            Some(file) => Msg::FileSelected(file),
            None => Msg::FileCleared,
        }
    });

    html! {
        <div class="form-field">
            <label for="intake-file">{"Importer un livret existant (PDF)"}</label>
            <input id="intake-file" type="file" accept="application/pdf" {onchange} />
            { build_file_info(component, link) }
            { error_line(component, IntakeField::File) }
        </div>
    }
}

/// Name and pretty-printed size of the selected file, with a way to clear it.
fn build_file_info(component: &IntakeComponent, link: &Scope<IntakeComponent>) -> Html {
    match &component.file_meta {
        Some(meta) => html! {
            <div class="file-info">
                <span>{ format!("{} ({})", meta.name, format_file_size(meta.size)) }</span>
                <button
                    type="button"
                    class="link-btn"
                    onclick={link.callback(|_| Msg::FileCleared)}
                >
                    {"Retirer"}
                </button>
            </div>
        },
        None => html! {},
    }
}

fn error_line(component: &IntakeComponent, field: IntakeField) -> Html {
    match component
        .errors
        .as_ref()
        .and_then(|errors| field_message(errors, field.name()))
    {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}
