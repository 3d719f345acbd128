use crate::layout::global_context::use_global_context;
use crate::shared::entity_list::{EntityListPage, TableRow};
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a003_category::Category;
use contracts::domain::common::EntityListManager;
use leptos::prelude::*;

impl TableRow for Category {
    fn columns() -> &'static [&'static str] {
        &["ID", "Category Name", "No. of Products"]
    }

    fn cells(&self, filter: &str) -> Vec<AnyView> {
        vec![
            self.id.to_string().into_any(),
            highlight_matches(&self.name, filter),
            self.products.to_string().into_any(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_global_context();
    let manager = RwSignal::new(EntityListManager::<Category>::new());
    let compact = Signal::derive(move || ctx.is_compact());

    view! {
        <EntityListPage
            manager=manager
            title="Category Management"
            search_placeholder="Search categories..."
            compact=compact
        />
    }
}
