//! Application shell: the login screen or the main layout

use crate::layout::global_context::use_global_context;
use crate::layout::registry::render_page;
use crate::layout::Shell;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Sidebar layout with the current page in the content area
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <Shell>
            {move || render_page(ctx.page.get())}
        </Shell>
    }
}

/// Shows `LoginPage` full screen until the user leaves it, then `MainLayout`
#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <Show
            when=move || ctx.page.get().shows_sidebar()
            fallback=|| view! {
                <div class="login-wrapper">
                    <LoginPage />
                </div>
            }
        >
            <MainLayout />
        </Show>
    }
}
