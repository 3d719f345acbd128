//! Search helpers shared by the list pages
use leptos::prelude::*;
use std::ops::Range;

/// Byte ranges of `text` matching `filter` case-insensitively, in order and
/// without overlap.
///
/// Matching runs on the lowercased text, the same way the list filters do.
/// A match is only reported when both ends fall on character boundaries of
/// `text`; matches that split the lowercase form of a single character are
/// skipped.
pub fn match_ranges(text: &str, filter: &str) -> Vec<Range<usize>> {
    let needle = filter.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    // (offset in lowered, offset in text) for every char start and the end
    let mut lowered = String::with_capacity(text.len());
    let mut offsets: Vec<(usize, usize)> = Vec::with_capacity(text.len() + 1);
    for (pos, ch) in text.char_indices() {
        offsets.push((lowered.len(), pos));
        lowered.extend(ch.to_lowercase());
    }
    offsets.push((lowered.len(), text.len()));

    let original_at = |lowered_pos: usize| {
        offsets
            .binary_search_by_key(&lowered_pos, |&(lower, _)| lower)
            .ok()
            .map(|i| offsets[i].1)
    };

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(found) = lowered[from..].find(&needle) {
        let start = from + found;
        let end = start + needle.len();
        match (original_at(start), original_at(end)) {
            (Some(text_start), Some(text_end)) => {
                ranges.push(text_start..text_end);
                from = end;
            }
            _ => {
                from = start + lowered[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    ranges
}

/// Highlight case-insensitive matches of `filter` inside `text`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for range in ranges {
        if range.start > last_pos {
            parts.push(view! { <span>{text[last_pos..range.start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[range.clone()].to_string()}</mark> }
                .into_any(),
        );
        last_pos = range.end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called on every keystroke
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    "\u{00d7}"
                </button>
            </Show>
        </div>
    }
}
