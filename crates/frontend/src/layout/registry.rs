//! Page key to component mapping

use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_vendor::ui::list::VendorList;
use crate::domain::a003_category::ui::list::CategoryList;
use crate::system::pages::login::LoginPage;
use contracts::shared::navigation::Page;
use leptos::prelude::*;

pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Page::Products => view! { <ProductList /> }.into_any(),
        Page::Vendors => view! { <VendorList /> }.into_any(),
        Page::Categories => view! { <CategoryList /> }.into_any(),
    }
}
