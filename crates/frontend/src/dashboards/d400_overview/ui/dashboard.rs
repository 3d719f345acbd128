use super::SalesChart;
use crate::layout::global_context::use_global_context;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Select;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::notice::{confirm, Notice, NoticeKind};
use crate::system::auth::context::{do_logout, use_auth};
use contracts::dashboards::d400_overview::data::{
    filter_top_products, kpis, pending_vendors, quick_insights, recent_activity, sample_sales,
    top_products, DEFAULT_RANGE, RANGE_OPTIONS,
};
use contracts::shared::config::AppConfig;
use contracts::shared::navigation::Page;
use leptos::prelude::*;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, set_auth_state) = use_auth();
    let export_file = use_context::<AppConfig>()
        .map(|c| c.export.top_products_file)
        .unwrap_or_else(|| "top_products.csv".to_string());

    let (query, set_query) = signal(String::new());
    let (range, set_range) = signal(DEFAULT_RANGE.to_string());
    let (message, set_message) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let products = StoredValue::new(top_products());
    let visible_products =
        Memo::new(move |_| products.with_value(|all| filter_top_products(all, &query.get())));

    let subtitle = move || match auth_state.get().email {
        Some(email) if !email.is_empty() => {
            format!("Admin overview \u{2022} All farms & marketplaces \u{2022} {}", email)
        }
        _ => "Admin overview \u{2022} All farms & marketplaces".to_string(),
    };

    let handle_export = move |_| {
        let result = products.with_value(|all| export_to_csv(all, &export_file));
        if let Err(e) = result {
            log::error!("CSV export failed: {}", e);
            set_error.set(Some(format!("Export failed: {}", e)));
        }
    };

    let handle_logout = move |_| {
        if confirm("Are you sure you want to logout?") {
            do_logout(set_auth_state, ctx);
        }
    };

    let range_options: Vec<(String, String)> = RANGE_OPTIONS
        .iter()
        .map(|r| (r.to_string(), r.to_string()))
        .collect();

    let pending = pending_vendors();
    let pending_count = format!("{} pending", pending.len());

    view! {
        <div class="page dashboard">
            <div class="page-header">
                <div class="page-header__content">
                    <div class="page-header__text">
                        <h1 class="page-header__title">"Agritech Dashboard"</h1>
                        <div class="page-header__subtitle">{subtitle}</div>
                    </div>
                </div>
                <div class="page-header__actions">
                    <SearchInput
                        value=Signal::derive(move || query.get())
                        on_change=Callback::new(move |q: String| set_query.set(q))
                        placeholder="Search products, vendors..."
                    />
                    <Select
                        value=Signal::derive(move || range.get())
                        on_change=Callback::new(move |r: String| {
                            log::debug!("d400: range '{}'", r);
                            set_range.set(r);
                        })
                        options=range_options
                    />
                    <button class="button button--secondary" on:click=move |_| ctx.navigate(Page::Products)>
                        {icon("plus")}
                        "Add product"
                    </button>
                    <button class="button button--secondary" on:click=handle_export>
                        {icon("download")}
                        "Export CSV"
                    </button>
                    <button class="button button--danger" title="Logout" on:click=handle_logout>
                        {icon("log-out")}
                        "Logout"
                    </button>
                </div>
            </div>

            <Notice
                message=error
                kind=NoticeKind::Error
                on_dismiss=Callback::new(move |_: ()| set_error.set(None))
            />
            <Notice
                message=message
                on_dismiss=Callback::new(move |_: ()| set_message.set(None))
            />

            <div class="dashboard__kpis">
                {kpis().into_iter().map(|kpi| view! { <StatCard kpi=kpi /> }).collect_view()}
            </div>

            <div class="dashboard__grid">
                <div class="dashboard__column">
                    <div class="card">
                        <div class="card__header">
                            <div>
                                <div class="card__title">"Sales Overview"</div>
                                <div class="card__subtitle">"Sales across the year"</div>
                            </div>
                            <div class="card__subtitle">{move || format!("Range: {}", range.get())}</div>
                        </div>
                        <SalesChart sales=sample_sales() />
                    </div>

                    <div class="card">
                        <div class="card__header">
                            <div>
                                <div class="card__title">"Top Products"</div>
                                <div class="card__subtitle">"By units sold"</div>
                            </div>
                        </div>
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Product"</th>
                                    <th class="table__header-cell">"Sold"</th>
                                    <th class="table__header-cell">"Revenue"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let filter = query.get();
                                    visible_products.get().into_iter().map(|p| {
                                        let sku = p.sku();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">
                                                    <div class="table__cell-title">{highlight_matches(&p.name, &filter)}</div>
                                                    <div class="card__subtitle">{sku}</div>
                                                </td>
                                                <td class="table__cell">{p.sold}</td>
                                                <td class="table__cell">{p.revenue}</td>
                                            </tr>
                                        }
                                    }).collect_view()
                                }}
                            </tbody>
                        </table>
                    </div>
                </div>

                <div class="dashboard__column">
                    <div class="card">
                        <div class="card__title">"Recent Activity"</div>
                        <div class="card__subtitle">"Latest updates from the marketplace"</div>
                        <ul class="card__list">
                            {recent_activity().into_iter().map(|(action, subject)| view! {
                                <li>{format!("{}: ", action)}<strong>{subject}</strong></li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            <div>
                                <div class="card__title">"Vendor Approvals"</div>
                                <div class="card__subtitle">"Pending vendor requests"</div>
                            </div>
                            <div class="card__subtitle">{pending_count}</div>
                        </div>
                        {pending.into_iter().map(|v| {
                            let approve_name = v.name.clone();
                            let reject_name = v.name.clone();
                            view! {
                                <div class="vendor-row">
                                    <div>
                                        <div class="table__cell-title">{v.name}</div>
                                        <div class="card__subtitle">{v.location}</div>
                                    </div>
                                    <div class="vendor-row__actions">
                                        <button
                                            class="button button--primary button--small"
                                            on:click=move |_| set_message.set(Some(format!("Approved {}", approve_name)))
                                        >
                                            {icon("check")}
                                            "Approve"
                                        </button>
                                        <button
                                            class="button button--secondary button--small"
                                            on:click=move |_| set_message.set(Some(format!("Rejected {}", reject_name)))
                                        >
                                            "Reject"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>

                    <div class="card">
                        <div class="card__title">"Quick Insights"</div>
                        <div class="card__subtitle">"Automated suggestions"</div>
                        <ul class="card__list">
                            {quick_insights().into_iter().map(|tip| view! { <li>{tip}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
