// Market adoption - polyline over a 100x100 viewport
use crate::domain::metrics::AdoptionSeries;
use leptos::prelude::*;

const VIEWPORT: f64 = 100.0;

/// Vertices of the trend line. x is spread evenly from 0 to the viewport
/// width and y is inverted so larger samples sit higher. A single sample
/// becomes a lone vertex at x = 0.
pub fn line_points(samples: &[f64]) -> Vec<(f64, f64)> {
    let last = samples.len().saturating_sub(1);
    samples
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if last == 0 {
                0.0
            } else {
                i as f64 / last as f64 * VIEWPORT
            };
            (x, VIEWPORT - value)
        })
        .collect()
}

fn format_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn MarketAdoptionChart(series: AdoptionSeries) -> impl IntoView {
    let points = format_points(&line_points(&series.samples));

    view! {
        <div class="line-chart-container">
            <svg viewBox="0 0 100 100" preserveAspectRatio="none" class="line-chart">
                <polyline
                    fill="none"
                    stroke="var(--secondary-accent)"
                    stroke-width="2"
                    points=points
                ></polyline>
            </svg>
            <div class="chart-labels">
                <span>{series.start_label}</span>
                <span>{series.end_label}</span>
            </div>
        </div>
    }
}
