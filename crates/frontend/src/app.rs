use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::AuthProvider;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

/// Id of the optional `<script type="application/toml">` element carrying a
/// configuration override
const CONFIG_ELEMENT_ID: &str = "app-config";

fn page_config() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load(page_config().as_deref());
    log::info!(
        "Starting {} on page '{}'",
        config.app.title,
        config.app.start_page.key()
    );

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(&config);
    ctx.init_viewport_tracking();
    provide_context(ctx);
    provide_context(config);

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
