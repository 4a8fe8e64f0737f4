use yew::prelude::*;

use crate::components::perf_panel::PerfPanel;
use crate::state::NotifyStatus;
use crate::utils::slug;

#[derive(Properties, PartialEq)]
pub struct ConsolePageProps {
    pub path: String,
    pub organization: Option<String>,
    /// Remembered project slug, owned by the root component. Console pages
    /// update it when their path carries one; routes without a project
    /// segment keep operating on the remembered value.
    pub project: UseStateHandle<Option<String>>,
    pub token: Option<String>,
    pub on_notify: Callback<(NotifyStatus, String)>,
}

#[function_component(ConsolePage)]
pub fn console_page(props: &ConsolePageProps) -> Html {
    // Remember the project slug whenever this route carries one
    {
        let project = props.project.clone();
        use_effect_with(props.path.clone(), move |path| {
            if let Some(found) = slug::project_slug(path) {
                project.set(Some(found));
            }
            || ()
        });
    }

    match (*props.project).clone() {
        Some(project) => html! {
            <section class="console-page">
                if let Some(org) = &props.organization {
                    <p class="console-breadcrumb">{ format!("{} / {}", org, project) }</p>
                }
                <PerfPanel
                    project={project}
                    token={props.token.clone()}
                    on_notify={props.on_notify.clone()}
                />
            </section>
        },
        None => html! {
            <section class="console-page">
                <p>{"Select a project to view its benchmarks."}</p>
            </section>
        },
    }
}
