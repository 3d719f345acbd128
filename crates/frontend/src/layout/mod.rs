pub mod center;
pub mod global_context;
pub mod left;
pub mod registry;

use global_context::use_global_context;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// |  (Left)   |           (Center)           |
/// +-----------+------------------------------+
/// ```
///
/// The sidebar column exists only on wide viewports; the content takes the
/// full width otherwise.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let is_wide = move || ctx.is_wide();

    view! {
        <div class="app-layout">
            <Show when=is_wide>
                <left::Left>
                    <left::Sidebar />
                </left::Left>
            </Show>

            <div
                class="app-main"
                class:app-main--with-sidebar=move || is_wide() && ctx.left_open.get()
            >
                <center::Center>
                    {children()}
                </center::Center>
            </div>
        </div>
    }
}
