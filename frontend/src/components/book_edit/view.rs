//! View for the booklet editor: sectioned form, recommendation rows, and the
//! share panel once the booklet is persisted.

use common::forms::book::{BookField, RecField, RecommendationForm};
use common::forms::{field_message, item_message};
use common::model::book::RecommendationKind;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::access_info::AccessInfoComponent;

use super::messages::Msg;
use super::state::BookEditComponent;

pub fn view(component: &BookEditComponent, ctx: &Context<BookEditComponent>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    let submit_label = if component.saving {
        if component.form.id.is_some() {
            "Enregistrement…"
        } else {
            "Création en cours..."
        }
    } else {
        "Enregistrer le livret"
    };

    html! {
        <div class="edit-page">
            <h1>{"Votre livret d'accueil"}</h1>
            { build_access_panel(component) }
            <form {onsubmit}>
                <section>
                    <h2>{"Arrivée"}</h2>
                    { text_field(component, link, BookField::ArrivalTime, "Heure d'arrivée") }
                    { textarea_field(component, link, BookField::AccessInstructions, "Instructions d'accès") }
                    { textarea_field(component, link, BookField::ArrivalAdditionalInfo, "Informations complémentaires (optionnel)") }
                </section>
                <section>
                    <h2>{"Départ"}</h2>
                    { text_field(component, link, BookField::DepartureTime, "Heure de départ") }
                    { textarea_field(component, link, BookField::ExitInstructions, "Instructions de sortie") }
                    { textarea_field(component, link, BookField::DepartureAdditionalInfo, "Informations complémentaires (optionnel)") }
                </section>
                <section>
                    <h2>{"Hébergement"}</h2>
                    { text_field(component, link, BookField::WifiName, "Nom du réseau WiFi") }
                    { text_field(component, link, BookField::WifiPassword, "Mot de passe WiFi") }
                    { textarea_field(component, link, BookField::HouseRules, "Règles de la maison (une par ligne)") }
                    { text_field(component, link, BookField::OwnerName, "Nom du propriétaire") }
                    { text_field(component, link, BookField::OwnerContact, "Contact du propriétaire") }
                    { textarea_field(component, link, BookField::GeneralInfo, "Informations générales (optionnel)") }
                </section>
                { build_recommendations_section(component, link) }
                <button type="submit" class="primary-btn" disabled={component.saving}>
                    { submit_label }
                </button>
            </form>
        </div>
    }
}

/// Share panel, shown once the backend has assigned both an identifier and an
/// access password.
fn build_access_panel(component: &BookEditComponent) -> Html {
    match component.book.as_ref() {
        Some(book) => match (&book.id, &book.access_password) {
            (Some(id), Some(password)) => html! {
                <AccessInfoComponent book_id={id.clone()} password={password.clone()} />
            },
            _ => html! {},
        },
        None => html! {},
    }
}

fn build_recommendations_section(
    component: &BookEditComponent,
    link: &Scope<BookEditComponent>,
) -> Html {
    html! {
        <section>
            <h2>{"Recommandations"}</h2>
            {
                for component
                    .form
                    .recommendations
                    .iter()
                    .zip(component.row_keys.iter())
                    .enumerate()
                    .map(|(index, (rec, key))| build_recommendation_row(
                        component, link, index, rec, key.to_string(),
                    ))
            }
            <button
                type="button"
                class="secondary-btn"
                onclick={link.callback(|_| Msg::AddRecommendation)}
            >
                {"Ajouter une recommandation"}
            </button>
        </section>
    }
}

fn build_recommendation_row(
    component: &BookEditComponent,
    link: &Scope<BookEditComponent>,
    index: usize,
    rec: &RecommendationForm,
    key: String,
) -> Html {
    html! {
        <div class="recommendation-row" {key}>
            { rec_text_field(component, link, index, rec, RecField::Name, "Nom") }
            { build_kind_select(component, link, index, rec) }
            { rec_text_field(component, link, index, rec, RecField::Address, "Adresse (optionnel)") }
            { rec_text_field(component, link, index, rec, RecField::Description, "Description (optionnel)") }
            <button
                type="button"
                class="link-btn"
                onclick={link.callback(move |_| Msg::RemoveRecommendation(index))}
            >
                {"Supprimer"}
            </button>
        </div>
    }
}

fn build_kind_select(
    component: &BookEditComponent,
    link: &Scope<BookEditComponent>,
    index: usize,
    rec: &RecommendationForm,
) -> Html {
    let onchange = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::RecChanged(index, RecField::Kind, select.value())
    });

    html! {
        <div class="form-field">
            <label>{"Type"}</label>
            <select {onchange}>
                <option value="" selected={rec.kind.is_none()}>{"Choisir un type"}</option>
                {
                    for RecommendationKind::ALL.into_iter().map(|kind| html! {
                        <option
                            value={kind.wire_value()}
                            selected={rec.kind == Some(kind)}
                        >
                            { kind.label() }
                        </option>
                    })
                }
            </select>
            { rec_error(component, index, RecField::Kind) }
        </div>
    }
}

fn text_field(
    component: &BookEditComponent,
    link: &Scope<BookEditComponent>,
    field: BookField,
    label: &str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FieldChanged(field, input.value())
    });

    html! {
        <div class="form-field">
            <label>{ label }</label>
            <input type="text" value={component.form.get(field).to_string()} {oninput} />
            { book_error(component, field) }
        </div>
    }
}

fn textarea_field(
    component: &BookEditComponent,
    link: &Scope<BookEditComponent>,
    field: BookField,
    label: &str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::FieldChanged(field, textarea.value())
    });

    html! {
        <div class="form-field">
            <label>{ label }</label>
            <textarea value={component.form.get(field).to_string()} {oninput} />
            { book_error(component, field) }
        </div>
    }
}

fn rec_text_field(
    component: &BookEditComponent,
    link: &Scope<BookEditComponent>,
    index: usize,
    rec: &RecommendationForm,
    field: RecField,
    label: &str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::RecChanged(index, field, input.value())
    });

    html! {
        <div class="form-field">
            <label>{ label }</label>
            <input type="text" value={rec.get(field).to_string()} {oninput} />
            { rec_error(component, index, field) }
        </div>
    }
}

fn book_error(component: &BookEditComponent, field: BookField) -> Html {
    match component
        .errors
        .as_ref()
        .and_then(|errors| field_message(errors, field.name()))
    {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}

fn rec_error(component: &BookEditComponent, index: usize, field: RecField) -> Html {
    match component
        .errors
        .as_ref()
        .and_then(|errors| item_message(errors, "recommendations", index, field.name()))
    {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}
