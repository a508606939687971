//! Share panel shown to the host once the booklet is persisted: the guest
//! link and the access password, each with copy-to-clipboard, plus a
//! show/hide toggle on the password. Clipboard failures are logged, never
//! surfaced as fatal.

use gloo_console::error;
use wasm_bindgen_futures::JsFuture;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

/// Shareable guest URL: origin + the guest route + the identifier.
pub fn share_url(origin: &str, id: &str) -> String {
    format!("{}/welcome-book/{}", origin, id)
}

fn current_share_url(id: &str) -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    share_url(&origin, id)
}

#[derive(Properties, PartialEq, Clone)]
pub struct AccessInfoProps {
    pub book_id: String,
    pub password: String,
}

#[derive(Clone, Copy, PartialEq)]
pub enum CopyTarget {
    Link,
    Password,
}

pub enum Msg {
    ToggleVisibility,
    Copy(CopyTarget),
    Copied(CopyTarget),
    ResetCopied(CopyTarget),
}

pub struct AccessInfoComponent {
    show_password: bool,
    copied_link: bool,
    copied_password: bool,
}

impl Component for AccessInfoComponent {
    type Message = Msg;
    type Properties = AccessInfoProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            show_password: false,
            copied_link: false,
            copied_password: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleVisibility => {
                self.show_password = !self.show_password;
                true
            }
            Msg::Copy(target) => {
                let text = match target {
                    CopyTarget::Link => current_share_url(&ctx.props().book_id),
                    CopyTarget::Password => ctx.props().password.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let window = match web_sys::window() {
                        Some(window) => window,
                        None => return,
                    };
                    let clipboard = window.navigator().clipboard();
                    match JsFuture::from(clipboard.write_text(&text)).await {
                        Ok(_) => link.send_message(Msg::Copied(target)),
                        Err(err) => {
                            error!(format!("Copie dans le presse-papiers impossible: {:?}", err))
                        }
                    }
                });
                false
            }
            Msg::Copied(target) => {
                self.set_copied(target, true);
                // The check mark reverts on its own after two seconds.
                let link = ctx.link().clone();
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(2000).await;
                    link.send_message(Msg::ResetCopied(target));
                });
                true
            }
            Msg::ResetCopied(target) => {
                self.set_copied(target, false);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let url = current_share_url(&ctx.props().book_id);
        let password_type = if self.show_password { "text" } else { "password" };
        let toggle_label = if self.show_password { "Masquer" } else { "Afficher" };

        html! {
            <div class="access-info">
                <h2>{"Partagez votre livret"}</h2>
                <div class="access-row">
                    <label>{"Lien du livret"}</label>
                    <input type="text" readonly=true value={url} />
                    { copy_button(link, CopyTarget::Link, self.copied_link) }
                </div>
                <div class="access-row">
                    <label>{"Mot de passe d'accès"}</label>
                    <input
                        type={password_type}
                        readonly=true
                        value={ctx.props().password.clone()}
                    />
                    <button
                        type="button"
                        class="link-btn"
                        onclick={link.callback(|_| Msg::ToggleVisibility)}
                    >
                        { toggle_label }
                    </button>
                    { copy_button(link, CopyTarget::Password, self.copied_password) }
                </div>
            </div>
        }
    }
}

impl AccessInfoComponent {
    fn set_copied(&mut self, target: CopyTarget, value: bool) {
        match target {
            CopyTarget::Link => self.copied_link = value,
            CopyTarget::Password => self.copied_password = value,
        }
    }
}

fn copy_button(link: &Scope<AccessInfoComponent>, target: CopyTarget, copied: bool) -> Html {
    html! {
        <button
            type="button"
            class="link-btn"
            onclick={link.callback(move |_| Msg::Copy(target))}
        >
            { if copied { "✔ Copié" } else { "Copier" } }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_url_joins_origin_route_and_identifier() {
        assert_eq!(
            share_url("https://livret.example", "abc123"),
            "https://livret.example/welcome-book/abc123"
        );
    }
}
