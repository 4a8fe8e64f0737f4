use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{JsonLogin, JsonSignup, Session};
use crate::services::auth_service;
use crate::state::NotifyStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub mode: AuthMode,
    /// Fired with the new session on success; the root component replaces
    /// the session holder and redirects into the console.
    pub on_authed: Callback<Session>,
    pub on_notify: Callback<(NotifyStatus, String)>,
}

#[function_component(AuthForm)]
pub fn auth_form(props: &AuthFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);

    let on_input = |field: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let onsubmit = {
        let mode = props.mode;
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let on_authed = props.on_authed.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let name = (*name).clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let submitting = submitting.clone();
            let on_authed = on_authed.clone();
            let on_notify = on_notify.clone();

            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);

                let result = match mode {
                    AuthMode::Login => auth_service::login(&JsonLogin { email, password }).await,
                    AuthMode::Signup => {
                        auth_service::signup(&JsonSignup {
                            name,
                            slug: None,
                            email,
                            password,
                        })
                        .await
                    }
                };

                match result {
                    Ok(response) => {
                        log::info!(
                            "✅ Authenticated: {}",
                            response.user.display_name().unwrap_or("unknown")
                        );
                        on_authed.emit(Session::new(response.user, response.token));
                    }
                    Err(e) => {
                        log::error!("❌ Authentication failed: {}", e);
                        on_notify.emit((NotifyStatus::Error, format!("Authentication failed: {}", e)));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let (title, submit_label) = match props.mode {
        AuthMode::Login => ("Log in", "Log in"),
        AuthMode::Signup => ("Sign up", "Create account"),
    };

    html! {
        <form class="auth-form" {onsubmit}>
            <h2>{ title }</h2>
            if props.mode == AuthMode::Signup {
                <input
                    type="text"
                    placeholder="Name"
                    value={(*name).clone()}
                    oninput={on_input(name.clone())}
                />
            }
            <input
                type="email"
                placeholder="Email"
                value={(*email).clone()}
                oninput={on_input(email.clone())}
            />
            <input
                type="password"
                placeholder="Password"
                value={(*password).clone()}
                oninput={on_input(password.clone())}
            />
            <button type="submit" disabled={*submitting}>
                { if *submitting { "…" } else { submit_label } }
            </button>
        </form>
    }
}
