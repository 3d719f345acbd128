use contracts::dashboards::d400_overview::chart::{max_value, polyline};
use contracts::dashboards::d400_overview::{ChartGeometry, SalesPoint};
use leptos::prelude::*;

/// Line chart of monthly sales as inline SVG
#[component]
pub fn SalesChart(sales: Vec<SalesPoint>) -> impl IntoView {
    let geometry = ChartGeometry::default();
    let values: Vec<f64> = sales.iter().map(|s| s.value).collect();
    let points = geometry.points(&values);
    let line = polyline(&points);
    let area = geometry.area_points(&points);
    let max = max_value(&values);

    let p = geometry.padding;
    let right = geometry.width - p;
    let label_y = geometry.height - p / 2.0;

    view! {
        <svg
            viewBox=geometry.view_box()
            width="100%"
            class="sales-chart"
            role="img"
            aria-label="Sales line chart"
        >
            {geometry.grid_lines().into_iter().map(|y| view! {
                <line x1=p x2=right y1=y y2=y class="sales-chart__grid" />
            }).collect_view()}

            <polygon points=area class="sales-chart__area" />
            <polyline points=line class="sales-chart__line" fill="none" />

            {points.iter().zip(sales.iter()).map(|(pt, s)| view! {
                <circle
                    cx=pt.x
                    cy=pt.y
                    r="4"
                    class="sales-chart__point"
                    aria-label=format!("{}: {}", s.month, s.value)
                />
            }).collect_view()}

            {points.iter().zip(sales.iter()).map(|(pt, s)| view! {
                <text x=pt.x y=label_y class="sales-chart__label" text-anchor="middle">
                    {s.month.clone()}
                </text>
            }).collect_view()}

            <text x="10" y=p class="sales-chart__axis">{max.to_string()}</text>
            <text x="10" y=geometry.baseline() class="sales-chart__axis">"0"</text>
        </svg>
    }
}
