use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<String>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit("/console".to_owned());
        })
    };

    html! {
        <section class="page page-home">
            <h1>{"Catch performance regressions before they ship"}</h1>
            <p>{"Track your benchmarks over time, per branch and per testbed."}</p>
            <a href="/console" {onclick}>{"Open the console"}</a>
        </section>
    }
}

#[function_component(DocsPage)]
pub fn docs_page() -> Html {
    html! {
        <section class="page page-docs">
            <h1>{"Docs"}</h1>
            <p>{"Getting started, API reference and adapter guides."}</p>
        </section>
    }
}

#[function_component(LegalPage)]
pub fn legal_page() -> Html {
    html! {
        <section class="page page-legal">
            <h1>{"Legal"}</h1>
            <p>{"Terms of use, privacy and licensing."}</p>
        </section>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="page page-not-found">
            <h1>{"404"}</h1>
            <p>{"This page does not exist."}</p>
        </section>
    }
}
