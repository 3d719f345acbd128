//! In-page notices and the browser confirm dialog

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "warning-box warning-box--info",
            NoticeKind::Error => "warning-box warning-box--error",
        }
    }

    fn mark(&self) -> &'static str {
        match self {
            NoticeKind::Info => "\u{2139}",
            NoticeKind::Error => "\u{26a0}",
        }
    }
}

/// Dismissable message box; renders nothing while `message` is `None`
#[component]
pub fn Notice(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] kind: Option<NoticeKind>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let kind = kind.unwrap_or(NoticeKind::Info);

    move || {
        message.get().map(|text| {
            view! {
                <div class=kind.class() role="alert">
                    <span class="warning-box__icon">{kind.mark()}</span>
                    <span class="warning-box__text">{text}</span>
                    <button class="button button--icon warning-box__close" on:click=move |_| on_dismiss.run(())>
                        "\u{00d7}"
                    </button>
                </div>
            }
        })
    }
}

/// Browser `confirm()`; `false` when no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
