use contracts::shared::config::AppConfig;
use contracts::shared::layout::Breakpoints;
use contracts::shared::navigation::Page;
use leptos::ev;
use leptos::prelude::*;
use web_sys::window;

/// Width used when the window cannot be measured
const FALLBACK_WIDTH: f64 = 1024.0;

pub fn current_viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_WIDTH)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
    pub viewport_width: RwSignal<f64>,
    pub breakpoints: Breakpoints,
}

impl AppGlobalContext {
    pub fn new(config: &AppConfig) -> Self {
        let breakpoints = config.layout;
        let width = current_viewport_width();
        Self {
            page: RwSignal::new(config.app.start_page),
            left_open: RwSignal::new(breakpoints.is_wide(width)),
            viewport_width: RwSignal::new(width),
            breakpoints,
        }
    }

    /// Keep `viewport_width` in sync with the window. A resize also resets
    /// the sidebar to open on wide screens and closed otherwise.
    pub fn init_viewport_tracking(&self) {
        let this = *self;
        let handle = window_event_listener(ev::resize, move |_| {
            let width = current_viewport_width();
            this.viewport_width.set(width);
            this.left_open.set(this.breakpoints.is_wide(width));
        });
        on_cleanup(move || handle.remove());
    }

    pub fn navigate(&self, page: Page) {
        if self.page.get_untracked() != page {
            log::info!("navigate: {} -> {}", self.page.get_untracked().key(), page.key());
            self.page.set(page);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn is_wide(&self) -> bool {
        self.breakpoints.is_wide(self.viewport_width.get())
    }

    pub fn is_compact(&self) -> bool {
        self.breakpoints.is_compact(self.viewport_width.get())
    }

    pub fn is_small_device(&self) -> bool {
        self.breakpoints.is_small_device(self.viewport_width.get())
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
