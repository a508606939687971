//! View for the guest page: one rendering per machine state.

use common::model::book::{BookData, Recommendation};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{ViewState, WelcomeBookComponent, MSG_FETCH_ERROR, MSG_LOADING, MSG_NOT_FOUND};

pub fn view(component: &WelcomeBookComponent, ctx: &Context<WelcomeBookComponent>) -> Html {
    match &component.state {
        ViewState::Verifying => html! {
            <div class="page-message">{ MSG_LOADING }</div>
        },
        ViewState::Unauthenticated { error } => build_password_gate(component, ctx.link(), error),
        ViewState::Loaded(book) => build_book(book),
        ViewState::NotFound => html! {
            <div class="page-message">
                <h1>{ MSG_NOT_FOUND }</h1>
            </div>
        },
        ViewState::Error => html! {
            <div class="page-message">
                <h1>{ MSG_FETCH_ERROR }</h1>
            </div>
        },
    }
}

fn build_password_gate(
    component: &WelcomeBookComponent,
    link: &Scope<WelcomeBookComponent>,
    error: &Option<String>,
) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitPassword
    });
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::PasswordChanged(input.value())
    });

    html! {
        <div class="password-gate">
            <h1>{"Ce livret est protégé"}</h1>
            <p>{"Saisissez le mot de passe communiqué par votre hôte."}</p>
            <form {onsubmit}>
                <input
                    type="password"
                    placeholder="Mot de passe"
                    value={component.password_input.clone()}
                    {oninput}
                />
                {
                    match error {
                        Some(message) => html! { <p class="field-error">{ message.as_str() }</p> },
                        None => html! {},
                    }
                }
                <button type="submit" class="primary-btn">{"Accéder au livret"}</button>
            </form>
        </div>
    }
}

fn build_book(book: &BookData) -> Html {
    html! {
        <div class="welcome-book">
            <h1>{ format!("Bienvenue chez {}", book.owner_name) }</h1>

            <section>
                <h2>{"Arrivée"}</h2>
                <p><strong>{"Heure d'arrivée : "}</strong>{ book.arrival_time.as_str() }</p>
                <p>{ book.access_instructions.as_str() }</p>
                { optional_paragraph(&book.arrival_additional_info) }
            </section>

            <section>
                <h2>{"Départ"}</h2>
                <p><strong>{"Heure de départ : "}</strong>{ book.departure_time.as_str() }</p>
                <p>{ book.exit_instructions.as_str() }</p>
                { optional_paragraph(&book.departure_additional_info) }
            </section>

            <section>
                <h2>{"WiFi"}</h2>
                <p><strong>{"Réseau : "}</strong>{ book.wifi_name.as_str() }</p>
                <p><strong>{"Mot de passe : "}</strong>{ book.wifi_password.as_str() }</p>
            </section>

            <section>
                <h2>{"Règles de la maison"}</h2>
                <ul>
                    { for book.house_rule_lines().map(|rule| html! { <li>{ rule }</li> }) }
                </ul>
            </section>

            { build_recommendations(&book.recommendations) }

            <section>
                <h2>{"Contact"}</h2>
                <p>{ book.owner_contact.as_str() }</p>
            </section>

            {
                if book.general_info.trim().is_empty() {
                    html! {}
                } else {
                    html! {
                        <section>
                            <h2>{"Informations générales"}</h2>
                            <p>{ book.general_info.as_str() }</p>
                        </section>
                    }
                }
            }
        </div>
    }
}

/// Entire section is omitted when the host added no recommendations.
fn build_recommendations(recommendations: &[Recommendation]) -> Html {
    if recommendations.is_empty() {
        return html! {};
    }

    html! {
        <section>
            <h2>{"Recommandations"}</h2>
            <div class="recommendation-grid">
                {
                    for recommendations.iter().map(|rec| html! {
                        <div class="recommendation-card">
                            <h3>{ rec.name.as_str() }</h3>
                            <span class="recommendation-kind">{ rec.kind.label() }</span>
                            { optional_paragraph(&rec.address) }
                            { optional_paragraph(&rec.description) }
                        </div>
                    })
                }
            </div>
        </section>
    }
}

fn optional_paragraph(text: &str) -> Html {
    if text.trim().is_empty() {
        html! {}
    } else {
        html! { <p>{ text }</p> }
    }
}
