use yew::prelude::*;

use crate::models::JsonUser;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub user: JsonUser,
    pub authed: bool,
    pub organization: Option<String>,
    pub on_navigate: Callback<String>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let link = |target: &'static str| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(target.to_owned());
        })
    };

    html! {
        <header class="navbar">
            <a class="navbar-brand" href="/" onclick={link("/")}>{"Perf Console"}</a>
            <nav class="navbar-links">
                <a href="/docs" onclick={link("/docs")}>{"Docs"}</a>
                <a href="/repo" onclick={link("/repo")}>{"Repo"}</a>
                if props.authed {
                    <>
                        <a href="/console" onclick={link("/console")}>{"Console"}</a>
                        if let Some(org) = &props.organization {
                            <span class="navbar-org">{ org.clone() }</span>
                        }
                        <span class="navbar-user">
                            { props.user.display_name().unwrap_or("Account").to_owned() }
                        </span>
                        <a href="/auth/logout" onclick={link("/auth/logout")}>{"Log out"}</a>
                    </>
                } else {
                    <>
                        <a href="/auth/login" onclick={link("/auth/login")}>{"Log in"}</a>
                        <a href="/auth/signup" onclick={link("/auth/signup")}>{"Sign up"}</a>
                    </>
                }
            </nav>
        </header>
    }
}
