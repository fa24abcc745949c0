// Donut chart - ring partitioned by stroke dash arcs
use crate::domain::metrics::CategoryShare;
use leptos::prelude::*;
use std::f64::consts::PI;

const RADIUS: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    /// Visible stroke length.
    pub length: f64,
    /// Negative running total of the arcs drawn before this one.
    pub offset: f64,
}

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Arcs in input order. Shares that do not total 100 leave a gap or overlap.
pub fn arc_segments(shares: &[CategoryShare], radius: f64) -> Vec<ArcSegment> {
    let circ = circumference(radius);
    let mut offset = 0.0;
    shares
        .iter()
        .map(|share| {
            let length = share.percentage / 100.0 * circ;
            let segment = ArcSegment { length, offset };
            offset -= length;
            segment
        })
        .collect()
}

#[component]
pub fn DonutChart(shares: Vec<CategoryShare>, center_label: String) -> impl IntoView {
    let circ = circumference(RADIUS);
    let segments = arc_segments(&shares, RADIUS);
    let r = RADIUS.to_string();

    let arcs = shares
        .iter()
        .zip(segments)
        .map(|(share, seg)| {
            view! {
                <circle
                    class="donut-segment"
                    cx="100"
                    cy="100"
                    r=r.clone()
                    stroke=share.color.clone()
                    stroke-dasharray=format!("{} {}", seg.length, circ)
                    stroke-dashoffset=seg.offset.to_string()
                ></circle>
            }
        })
        .collect_view();

    let legend = shares
        .into_iter()
        .map(|share| {
            view! {
                <div class="legend-item">
                    <span
                        class="legend-color"
                        style=format!("background-color: {}", share.color)
                    ></span>
                    <span class="legend-label">
                        {format!("{} ({}%)", share.name, share.percentage)}
                    </span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="donut-chart-container">
            <svg viewBox="0 0 200 200" class="donut-chart">
                <circle class="donut-hole" cx="100" cy="100" r=r.clone()></circle>
                <circle class="donut-ring" cx="100" cy="100" r=r></circle>
                {arcs}
                <text x="50%" y="50%" text-anchor="middle" dy=".3em" class="donut-center-text">
                    {center_label}
                </text>
            </svg>
            <div class="donut-legend">{legend}</div>
        </div>
    }
}
