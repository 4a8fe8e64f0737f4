use yew::prelude::*;

use crate::state::NotifyStatus;

#[derive(Properties, PartialEq)]
pub struct LogoutProps {
    pub on_clear: Callback<()>,
    pub on_notify: Callback<(NotifyStatus, String)>,
    pub on_navigate: Callback<String>,
}

/// Visiting `/auth/logout` clears the session wholesale and heads home.
#[function_component(Logout)]
pub fn logout(props: &LogoutProps) -> Html {
    {
        let on_clear = props.on_clear.clone();
        let on_notify = props.on_notify.clone();
        let on_navigate = props.on_navigate.clone();
        use_effect_with((), move |_| {
            on_clear.emit(());
            on_notify.emit((NotifyStatus::Ok, "Logged out".to_owned()));
            on_navigate.emit("/".to_owned());
            || ()
        });
    }

    html! { <p class="auth-logout">{"Logging out…"}</p> }
}
