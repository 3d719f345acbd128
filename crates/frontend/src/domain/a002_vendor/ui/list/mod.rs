use crate::shared::components::ui::StatusBadge;
use crate::shared::entity_list::{EntityListPage, TableRow};
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a002_vendor::Vendor;
use contracts::domain::common::EntityListManager;
use leptos::prelude::*;

impl TableRow for Vendor {
    fn columns() -> &'static [&'static str] {
        &["Name", "Contact", "Rating", "Location", "Status"]
    }

    fn cells(&self, filter: &str) -> Vec<AnyView> {
        vec![
            highlight_matches(&self.name, filter),
            self.contact.clone().into_any(),
            self.rating.to_string().into_any(),
            highlight_matches(&self.location, filter),
            view! { <StatusBadge status=self.status.as_str() /> }.into_any(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn VendorList() -> impl IntoView {
    let manager = RwSignal::new(EntityListManager::<Vendor>::new());

    view! {
        <EntityListPage
            manager=manager
            title="Vendors Management"
            search_placeholder="Search by name or location"
        />
    }
}
