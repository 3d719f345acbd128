//! Sidebar with the page menu and its hamburger toggle

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::shared::config::AppConfig;
use contracts::shared::navigation::Page;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let title = use_context::<AppConfig>()
        .map(|c| c.app.title)
        .unwrap_or_default();
    let is_open = move || ctx.left_open.get();

    view! {
        <button
            class="app-sidebar__hamburger"
            class:app-sidebar__hamburger--open=is_open
            title=move || if is_open() { "Hide navigation" } else { "Show navigation" }
            on:click=move |_| ctx.toggle_left()
        >
            {move || if is_open() { "\u{2716}" } else { "\u{2630}" }}
        </button>

        <Show when=is_open>
            <nav class="app-sidebar">
                <h2 class="app-sidebar__title">{title.clone()}</h2>
                {Page::MENU.into_iter().map(|page| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.page.get() == page
                            on:click=move |_| ctx.navigate(page)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(page.icon())}
                                <span>{page.title()}</span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </nav>
        </Show>
    }
}
