use yew::prelude::*;

use crate::hooks::PerfPlot;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const PADDING: f64 = 32.0;

#[derive(Properties, PartialEq)]
pub struct PerfPlotProps {
    /// `None` for a malformed or absent payload: nothing renders and the
    /// previous axis is not replaced by an empty one.
    pub plot: Option<PerfPlot>,
}

#[function_component(PerfPlotView)]
pub fn perf_plot_view(props: &PerfPlotProps) -> Html {
    let Some(plot) = &props.plot else {
        return html! {};
    };

    let points: Vec<(f64, f64)> = plot
        .series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| (p.x, p.y)))
        .collect();

    let (x_min, x_max) = bounds(points.iter().map(|(x, _)| *x));
    let (y_min, y_max) = bounds(points.iter().map(|(_, y)| *y));

    let scale_x = move |x: f64| {
        let span = (x_max - x_min).max(f64::EPSILON);
        PADDING + (x - x_min) / span * (WIDTH - 2.0 * PADDING)
    };
    let scale_y = move |y: f64| {
        let span = (y_max - y_min).max(f64::EPSILON);
        HEIGHT - PADDING - (y - y_min) / span * (HEIGHT - 2.0 * PADDING)
    };

    let lines = plot
        .series
        .iter()
        .map(|series| {
            let path = series
                .points
                .iter()
                .map(|p| format!("{:.1},{:.1}", scale_x(p.x), scale_y(p.y)))
                .collect::<Vec<_>>()
                .join(" ");
            html! {
                <polyline
                    points={path}
                    fill="none"
                    stroke={series.color}
                    stroke-width="2"
                />
            }
        })
        .collect::<Html>();

    let legend = plot
        .series
        .iter()
        .map(|series| {
            html! {
                <span class="perf-legend-entry" style={format!("color: {}", series.color)}>
                    { series.name.clone() }
                </span>
            }
        })
        .collect::<Html>();

    html! {
        <figure class="perf-plot">
            <svg viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)} xmlns="http://www.w3.org/2000/svg">
                <text class="perf-axis-label" x="8" y="20">{ plot.y_label }</text>
                { lines }
            </svg>
            <figcaption class="perf-legend">{ legend }</figcaption>
        </figure>
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::MAX, f64::MIN), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}
