use leptos::prelude::*;

/// Colour variant for a status label
fn status_class(status: &str) -> &'static str {
    match status.trim().to_ascii_lowercase().as_str() {
        "active" | "approved" => "badge badge--success",
        "pending" => "badge badge--warning",
        "inactive" | "rejected" => "badge badge--error",
        _ => "badge badge--neutral",
    }
}

/// Status badge; the colour follows the status text
#[component]
pub fn StatusBadge(
    /// Status text, e.g. "Active" or "Pending"
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let class = status_class(&status);

    view! {
        <span class=class>{status}</span>
    }
}
