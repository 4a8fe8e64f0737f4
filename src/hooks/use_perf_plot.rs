use chrono::DateTime;
use serde_json::Value;
use yew::prelude::*;

use crate::models::PerfKind;
use crate::services::fetch_perf;

/// Fixed palette; series cycle through it by position, so series index 10
/// reuses the color of series index 0.
pub const PLOT_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Axis label for payloads whose kind is unrecognized.
pub const FALLBACK_AXIS_LABEL: &str = "↑ UNITS";

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// One renderable line mark.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub name: String,
    pub color: &'static str,
    pub points: Vec<PlotPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerfPlot {
    pub y_label: &'static str,
    pub series: Vec<PlotSeries>,
}

/// Project a fetched perf payload plus a per-series active mask into line
/// marks and an axis label. Returns `None` for a malformed payload (not an
/// object, null, or non-array `perf_data`): the caller renders nothing and
/// keeps its previous axis rather than failing.
pub fn project_perf(kind: Option<PerfKind>, payload: &Value, active: &[bool]) -> Option<PerfPlot> {
    let perf_data = payload.get("perf_data")?.as_array()?;

    let y_label = kind.map(|k| k.axis_label()).unwrap_or(FALLBACK_AXIS_LABEL);
    let mut series = Vec::new();

    for (index, raw_series) in perf_data.iter().enumerate() {
        if !active.get(index).copied().unwrap_or(false) {
            continue;
        }

        let name = raw_series
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Series {}", index + 1));

        let mut points = Vec::new();
        if let Some(data) = raw_series.get("data").and_then(Value::as_array) {
            for datum in data {
                let Some(start_ms) = start_time_ms(datum.get("start_time")) else {
                    continue;
                };
                let iteration = datum.get("iteration").and_then(Value::as_f64).unwrap_or(0.0);
                points.push(PlotPoint {
                    // Start time advanced by the iteration count, in seconds
                    x: start_ms + iteration * 1_000.0,
                    y: metric_value(kind, datum.get("perf")),
                });
            }
        }

        series.push(PlotSeries {
            name,
            color: PLOT_PALETTE[index % PLOT_PALETTE.len()],
            points,
        });
    }

    Some(PerfPlot { y_label, series })
}

/// Start time in epoch milliseconds, from either a numeric or an RFC 3339
/// string field.
fn start_time_ms(value: Option<&Value>) -> Option<f64> {
    let value = value?;
    if let Some(ms) = value.as_f64() {
        return Some(ms);
    }
    let raw = value.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.timestamp_millis() as f64)
}

fn metric_value(kind: Option<PerfKind>, perf: Option<&Value>) -> f64 {
    let field = |name: &str| perf.and_then(|p| p.get(name)).and_then(Value::as_f64);
    match kind {
        Some(PerfKind::Latency) => field("duration").unwrap_or(0.0),
        Some(PerfKind::Throughput) => match (field("event"), field("unit_time")) {
            (Some(event), Some(unit_time)) if unit_time != 0.0 => event / unit_time,
            _ => 0.0,
        },
        Some(PerfKind::Compute) | Some(PerfKind::Memory) | Some(PerfKind::Storage) => {
            field("avg").unwrap_or(0.0)
        }
        None => 0.0,
    }
}

#[derive(Clone, PartialEq)]
pub struct UsePerfPlotHandle {
    pub payload: UseStateHandle<Option<Value>>,
    pub active: UseStateHandle<Vec<bool>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub toggle_series: Callback<usize>,
}

/// Fetch the perf payload for a project and hold the per-series active mask
/// driving the plot toggles.
#[hook]
pub fn use_perf_plot(project: Option<String>, token: Option<String>) -> UsePerfPlotHandle {
    let payload = use_state(|| None::<Value>);
    let active = use_state(Vec::<bool>::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Fetch on mount and whenever the project changes
    {
        let payload = payload.clone();
        let active = active.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((project, token), move |(project, token)| {
            if let Some(project) = project.clone() {
                let token = token.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    loading.set(true);
                    match fetch_perf(&project, token.as_deref()).await {
                        Ok(value) => {
                            let count = value
                                .get("perf_data")
                                .and_then(Value::as_array)
                                .map(|series| series.len())
                                .unwrap_or(0);
                            log::info!("📊 Perf payload loaded: {} series", count);
                            active.set(vec![true; count]);
                            payload.set(Some(value));
                            error.set(None);
                        }
                        Err(e) => {
                            log::error!("❌ Error fetching perf data: {}", e);
                            error.set(Some(e));
                        }
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let toggle_series = {
        let active = active.clone();
        Callback::from(move |index: usize| {
            let mut mask = (*active).clone();
            if let Some(flag) = mask.get_mut(index) {
                *flag = !*flag;
                active.set(mask);
            }
        })
    };

    UsePerfPlotHandle {
        payload,
        active,
        loading,
        error,
        toggle_series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload_with(kind_series: Vec<Value>) -> Value {
        json!({ "kind": "latency", "perf_data": kind_series })
    }

    #[test]
    fn throughput_divides_events_by_unit_time() {
        let payload = json!({
            "kind": "throughput",
            "perf_data": [{
                "data": [{
                    "start_time": 1_000.0,
                    "iteration": 0,
                    "perf": { "event": 10.0, "unit_time": 2.0 }
                }]
            }]
        });
        let plot = project_perf(Some(PerfKind::Throughput), &payload, &[true]).unwrap();
        assert_eq!(plot.series.len(), 1);
        assert_eq!(plot.series[0].points[0].y, 5.0);
    }

    #[test]
    fn inactive_series_produce_no_marks() {
        let payload = payload_with(vec![json!({
            "data": [{ "start_time": 0.0, "iteration": 0, "perf": { "duration": 42.0 } }]
        })]);
        let plot = project_perf(Some(PerfKind::Latency), &payload, &[false]).unwrap();
        assert!(plot.series.is_empty());
    }

    #[test]
    fn palette_cycles_every_ten_series() {
        let series: Vec<Value> = (0..12).map(|_| json!({ "data": [] })).collect();
        let payload = payload_with(series);
        let plot = project_perf(Some(PerfKind::Latency), &payload, &[true; 12]).unwrap();
        assert_eq!(plot.series[11].color, plot.series[1].color);
        assert_ne!(plot.series[0].color, plot.series[1].color);
    }

    #[test]
    fn malformed_payload_yields_nothing() {
        assert!(project_perf(Some(PerfKind::Latency), &Value::Null, &[true]).is_none());
        assert!(project_perf(Some(PerfKind::Latency), &json!("nope"), &[true]).is_none());
        assert!(
            project_perf(Some(PerfKind::Latency), &json!({ "perf_data": 7 }), &[true]).is_none()
        );
        assert!(project_perf(Some(PerfKind::Latency), &json!({}), &[true]).is_none());
    }

    #[test]
    fn latency_reads_raw_duration() {
        let payload = payload_with(vec![json!({
            "data": [{ "start_time": 0.0, "iteration": 0, "perf": { "duration": 42.5 } }]
        })]);
        let plot = project_perf(Some(PerfKind::Latency), &payload, &[true]).unwrap();
        assert_eq!(plot.series[0].points[0].y, 42.5);
        assert_eq!(plot.y_label, "↑ Nanoseconds (ns)");
    }

    #[test]
    fn unrecognized_kind_falls_back_to_zero_and_generic_label() {
        let payload = payload_with(vec![json!({
            "data": [{ "start_time": 0.0, "iteration": 0, "perf": { "duration": 42.0 } }]
        })]);
        let plot = project_perf(None, &payload, &[true]).unwrap();
        assert_eq!(plot.series[0].points[0].y, 0.0);
        assert_eq!(plot.y_label, FALLBACK_AXIS_LABEL);
    }

    #[test]
    fn x_axis_advances_start_time_by_iteration_seconds() {
        let payload = payload_with(vec![json!({
            "data": [
                { "start_time": "2026-08-06T00:00:00Z", "iteration": 0, "perf": { "duration": 1.0 } },
                { "start_time": "2026-08-06T00:00:00Z", "iteration": 3, "perf": { "duration": 2.0 } }
            ]
        })]);
        let plot = project_perf(Some(PerfKind::Latency), &payload, &[true]).unwrap();
        let points = &plot.series[0].points;
        assert_eq!(points[1].x - points[0].x, 3_000.0);
    }

    #[test]
    fn throughput_with_zero_unit_time_degrades_to_zero() {
        let payload = json!({
            "perf_data": [{
                "data": [{ "start_time": 0.0, "iteration": 0, "perf": { "event": 10.0, "unit_time": 0.0 } }]
            }]
        });
        let plot = project_perf(Some(PerfKind::Throughput), &payload, &[true]).unwrap();
        assert_eq!(plot.series[0].points[0].y, 0.0);
    }
}
