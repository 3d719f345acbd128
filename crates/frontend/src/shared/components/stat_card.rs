use crate::shared::icons::icon;
use contracts::dashboards::d400_overview::Kpi;
use leptos::prelude::*;

/// Headline figure with an icon
#[component]
pub fn StatCard(kpi: Kpi) -> impl IntoView {
    let class = if kpi.highlight {
        "stat-card stat-card--success"
    } else {
        "stat-card"
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(&kpi.icon)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{kpi.label}</div>
                <div class="stat-card__value">{kpi.value}</div>
            </div>
        </div>
    }
}
