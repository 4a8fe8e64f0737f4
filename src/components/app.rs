use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::auth::{AuthForm, AuthMode, Logout};
use crate::components::console::ConsolePage;
use crate::components::navbar::Navbar;
use crate::components::notification::NotificationToast;
use crate::components::pages::{DocsPage, HomePage, LegalPage, NotFoundPage};
use crate::config::REPO_URL;
use crate::hooks::{use_notification, use_session, use_token_poller};
use crate::models::Session;
use crate::routes::{self, Route};
use crate::state::{resolve_redirect, NotifyStatus};
use crate::utils::slug;

/// Root application component. Owns the session, notification, redirect,
/// title and slug state and injects handles into the route trees.
#[function_component(App)]
pub fn app() -> Html {
    let path = use_state(routes::current_path);
    let redirect = use_state(|| None::<String>);
    let session = use_session();
    let notification = use_notification();

    // Project slug is independent state: seeded once from the path, then
    // updated explicitly by console pages, since not every console route
    // carries one
    let project = use_state(|| slug::project_slug(&routes::current_path()));

    use_token_poller(session.session.clone());

    // Track browser navigation. Registered once for the app lifetime.
    {
        let path = path.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                path.set(routes::current_path());
            }) as Box<dyn FnMut(web_sys::Event)>);
            if let Some(win) = web_sys::window() {
                let _ = win
                    .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            }
            closure.forget();
            || ()
        });
    }

    // Consume a pending redirect: exactly one navigation per path mismatch,
    // cleared in the same step. A redirect to the current path stays pending.
    {
        let path = path.clone();
        let redirect = redirect.clone();
        use_effect_with(
            ((*redirect).clone(), (*path).clone()),
            move |(pending, current)| {
                if let Some(target) = resolve_redirect(pending.as_deref(), current) {
                    log::info!("🧭 Redirecting to {}", target);
                    routes::navigate(&target);
                    redirect.set(None);
                    path.set(target);
                }
                || ()
            },
        );
    }

    let route = Route::from_path(&path);

    // Organization slug recomputes with every path change
    let organization = slug::organization_slug(&path);

    // Update the document title only when it changed
    {
        let title = match (route, (*project).clone()) {
            (Route::Console, Some(project)) => format!("{} | Perf Console", project),
            _ => route.title().to_owned(),
        };
        use_effect_with(title, move |title| {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if doc.title() != *title {
                    doc.set_title(title);
                }
            }
            || ()
        });
    }

    // /repo is an external shortcut out of the app
    use_effect_with(route, move |route| {
        if *route == Route::Repo {
            routes::redirect_external(REPO_URL);
        }
        || ()
    });

    // Setter callbacks injected into child components
    let on_navigate = {
        let redirect = redirect.clone();
        Callback::from(move |target: String| redirect.set(Some(target)))
    };

    let on_notify = notification.show.clone();

    let on_authed = {
        let replace = session.replace.clone();
        let on_notify = on_notify.clone();
        let redirect = redirect.clone();
        Callback::from(move |new_session: Session| {
            replace.emit(new_session);
            on_notify.emit((NotifyStatus::Ok, "Logged in".to_owned()));
            redirect.set(Some("/console".to_owned()));
        })
    };

    let page = match route {
        Route::Home => html! { <HomePage on_navigate={on_navigate.clone()} /> },
        Route::AuthLogin => html! {
            <AuthForm
                mode={AuthMode::Login}
                on_authed={on_authed.clone()}
                on_notify={on_notify.clone()}
            />
        },
        Route::AuthSignup => html! {
            <AuthForm
                mode={AuthMode::Signup}
                on_authed={on_authed.clone()}
                on_notify={on_notify.clone()}
            />
        },
        Route::AuthLogout => html! {
            <Logout
                on_clear={session.clear.clone()}
                on_notify={on_notify.clone()}
                on_navigate={on_navigate.clone()}
            />
        },
        Route::Console => html! {
            <ConsolePage
                path={(*path).clone()}
                organization={organization.clone()}
                project={project.clone()}
                token={session.session.token.clone()}
                on_notify={on_notify.clone()}
            />
        },
        Route::Docs => html! { <DocsPage /> },
        Route::Legal => html! { <LegalPage /> },
        Route::Repo => html! {},
        Route::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <>
            <Navbar
                user={session.session.user.clone()}
                authed={session.session.has_token()}
                organization={organization}
                on_navigate={on_navigate}
            />
            <NotificationToast
                notification={(*notification.notification).clone()}
                on_dismiss={notification.dismiss.clone()}
            />
            <main class="console-main">{ page }</main>
        </>
    }
}
