//! SVG line chart of a component's sensor history.

use inventory::Component;
use leptos::prelude::*;

use crate::util::chart::{self, CHART_HEIGHT, CHART_PADDING, CHART_WIDTH};

/// Temperature, humidity, and gas level over the component's timestamps.
#[component]
pub fn SensorGraph(component: Component) -> impl IntoView {
    let plot = chart::plot(&component);
    if plot.is_empty() {
        return view! { <p class="graph__empty">"No readings recorded."</p> }.into_any();
    }

    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");
    let axis_left = CHART_PADDING;
    let axis_right = CHART_WIDTH - CHART_PADDING;
    let axis_bottom = CHART_HEIGHT - CHART_PADDING;
    let label_y = CHART_HEIGHT - CHART_PADDING / 3.0;

    let legend = plot
        .lines
        .iter()
        .map(|line| {
            let swatch = format!("background-color: {}", line.channel.color);
            view! {
                <li class="graph__legend-item">
                    <span class="graph__swatch" style=swatch></span>
                    {line.channel.label}
                </li>
            }
        })
        .collect::<Vec<_>>();

    let grid = plot
        .y_ticks
        .into_iter()
        .map(|tick| {
            view! {
                <line class="graph__grid" x1=axis_left x2=axis_right y1={tick.position} y2={tick.position}></line>
                <text class="graph__tick" x={axis_left - 6.0} y={tick.position} text-anchor="end">{tick.label}</text>
            }
        })
        .collect::<Vec<_>>();

    let x_labels = plot
        .x_ticks
        .into_iter()
        .map(|tick| {
            view! {
                <text class="graph__tick" x={tick.position} y=label_y text-anchor="middle">{tick.label}</text>
            }
        })
        .collect::<Vec<_>>();

    let polylines = plot
        .lines
        .iter()
        .map(|line| {
            view! {
                <polyline
                    class="graph__line"
                    fill="none"
                    stroke={line.channel.color}
                    stroke-width="2"
                    points={line.svg_points()}
                ></polyline>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="graph">
            <ul class="graph__legend">{legend}</ul>
            <svg class="graph__svg" viewBox=view_box role="img" aria-label="Sensor readings">
                {grid}
                <line class="graph__axis" x1=axis_left x2=axis_right y1=axis_bottom y2=axis_bottom></line>
                {x_labels}
                {polylines}
            </svg>
        </div>
    }
    .into_any()
}
