use serde_json::Value;
use yew::prelude::*;

use crate::components::perf_plot::PerfPlotView;
use crate::hooks::{project_perf, use_perf_plot};
use crate::models::PerfKind;
use crate::state::NotifyStatus;

#[derive(Properties, PartialEq)]
pub struct PerfPanelProps {
    pub project: String,
    pub token: Option<String>,
    pub on_notify: Callback<(NotifyStatus, String)>,
}

/// Charting panel: fetches the project's perf payload, holds the per-series
/// toggles and feeds the projected line marks into the plot.
#[function_component(PerfPanel)]
pub fn perf_panel(props: &PerfPanelProps) -> Html {
    let handle = use_perf_plot(Some(props.project.clone()), props.token.clone());

    // Fetch failures surface through the ambient notification only
    {
        let on_notify = props.on_notify.clone();
        use_effect_with((*handle.error).clone(), move |error| {
            if let Some(e) = error {
                on_notify.emit((NotifyStatus::Error, e.clone()));
            }
            || ()
        });
    }

    let kind = handle
        .payload
        .as_ref()
        .and_then(|payload| payload.get("kind"))
        .and_then(Value::as_str)
        .and_then(PerfKind::from_str);

    let plot = handle
        .payload
        .as_ref()
        .and_then(|payload| project_perf(kind, payload, &handle.active));

    let toggles = handle
        .active
        .iter()
        .enumerate()
        .map(|(index, active)| {
            let onchange = {
                let toggle_series = handle.toggle_series.clone();
                Callback::from(move |_: Event| toggle_series.emit(index))
            };
            html! {
                <label class="perf-toggle">
                    <input type="checkbox" checked={*active} {onchange} />
                    { format!("Series {}", index + 1) }
                </label>
            }
        })
        .collect::<Html>();

    html! {
        <div class="perf-panel">
            <h2>{ format!("{} benchmarks", props.project) }</h2>
            if *handle.loading {
                <p class="perf-loading">{"Loading…"}</p>
            }
            <div class="perf-toggles">{ toggles }</div>
            <PerfPlotView {plot} />
        </div>
    }
}
