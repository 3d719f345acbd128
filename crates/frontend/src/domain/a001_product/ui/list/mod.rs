use crate::shared::components::ui::{Select, StatusBadge};
use crate::shared::entity_list::{EntityListPage, TableRow};
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a001_product::{Product, ProductSort};
use contracts::domain::common::EntityListManager;
use leptos::prelude::*;
use std::sync::Arc;

impl TableRow for Product {
    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "Vendor", "Category", "Stock", "Price", "Status"]
    }

    fn cells(&self, filter: &str) -> Vec<AnyView> {
        vec![
            self.id.to_string().into_any(),
            highlight_matches(&self.name, filter),
            self.vendor.clone().into_any(),
            self.category.clone().into_any(),
            self.stock.clone().into_any(),
            self.price_label().into_any(),
            view! { <StatusBadge status=self.status.clone() /> }.into_any(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let manager = RwSignal::new(EntityListManager::<Product>::new());
    let sort = RwSignal::new(ProductSort::default());

    let rows = Memo::new(move |_| {
        let order = sort.get();
        manager.with(|m| {
            m.sorted_filtered_items(|a, b| order.compare(a, b))
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let sort_options: Vec<(String, String)> = ProductSort::all()
        .iter()
        .map(|s| (s.key().to_string(), s.label().to_string()))
        .collect();

    let controls: ChildrenFn = Arc::new(move || {
        view! {
            <Select
                value=Signal::derive(move || sort.get().key().to_string())
                on_change=Callback::new(move |key: String| {
                    log::debug!("a001: sort by '{}'", key);
                    sort.set(ProductSort::from_key(&key));
                })
                options=sort_options.clone()
            />
        }
        .into_any()
    });

    view! {
        <EntityListPage
            manager=manager
            title="Product Master Table"
            search_placeholder="Search Product..."
            rows=rows
            controls=controls
        />
    }
}
