//! Generic list page over an [`EntityListManager`]: header with search and
//! add button, table with per-row actions, and the add/edit modal.

pub mod editor;

use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::common::{EntityListManager, EntityRecord};
use editor::EntityEditor;
use leptos::prelude::*;

/// How a record is rendered as a table row
pub trait TableRow: EntityRecord + PartialEq {
    /// Column headers, without the actions column
    fn columns() -> &'static [&'static str];

    /// One view per column; `filter` is the current search text
    fn cells(&self, filter: &str) -> Vec<AnyView>;
}

/// Rows of the manager's filtered view. Only notifies when the rows change,
/// so typing in the modal does not redraw the table.
pub fn filtered_rows<R: TableRow>(manager: RwSignal<EntityListManager<R>>) -> Memo<Vec<R>> {
    Memo::new(move |_| manager.with(|m| m.filtered_items().cloned().collect::<Vec<_>>()))
}

#[component]
pub fn EntityListPage<R: TableRow>(
    manager: RwSignal<EntityListManager<R>>,
    /// Page heading
    #[prop(into)]
    title: String,
    #[prop(into)]
    search_placeholder: String,
    /// Rows to show; defaults to the filtered view in insertion order
    #[prop(optional)]
    rows: Option<Memo<Vec<R>>>,
    /// Extra header controls placed before the add button
    #[prop(optional)]
    controls: Option<ChildrenFn>,
    /// Stacked header and full-width modal
    #[prop(optional, into)]
    compact: Signal<bool>,
) -> impl IntoView {
    let rows = rows.unwrap_or_else(|| filtered_rows(manager));
    let search = Memo::new(move |_| manager.with(|m| m.search_text().to_string()));
    let editing = Memo::new(move |_| manager.with(|m| m.is_editing()));

    let handle_search = Callback::new(move |text: String| {
        manager.update(|m| m.set_search_text(text));
    });

    let handle_add = move |_| {
        manager.update(|m| m.open_add());
    };

    let add_label = format!("Add {}", R::element_name());
    let columns = R::columns();

    view! {
        <div class="page" class:page--compact=move || compact.get()>
            <PageHeader title=title stacked=compact>
                <SearchInput
                    value=Signal::derive(move || search.get())
                    on_change=handle_search
                    placeholder=search_placeholder
                />
                {controls.map(|controls| controls())}
                <button class="button button--primary" on:click=handle_add>
                    {icon("plus")}
                    {add_label}
                </button>
            </PageHeader>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {columns.iter().map(|column| view! {
                                <th class="table__header-cell">{*column}</th>
                            }).collect_view()}
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = search.get();
                            let rows = rows.get();
                            if rows.is_empty() {
                                let span = (columns.len() + 1).to_string();
                                return view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--empty" colspan=span>
                                            {format!("No {} found", R::list_name().to_lowercase())}
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let id_for_edit = row.id().clone();
                                let id_for_delete = row.id().clone();
                                view! {
                                    <tr class="table__row">
                                        {row.cells(&filter).into_iter().map(|cell| view! {
                                            <td class="table__cell">{cell}</td>
                                        }).collect_view()}
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--secondary button--small"
                                                on:click=move |_| {
                                                    manager.update(|m| {
                                                        m.open_edit(&id_for_edit);
                                                    });
                                                }
                                            >
                                                {icon("edit")}
                                                "Edit"
                                            </button>
                                            <button
                                                class="button button--danger button--small"
                                                on:click=move |_| {
                                                    manager.update(|m| {
                                                        m.delete(&id_for_delete);
                                                    });
                                                }
                                            >
                                                {icon("delete")}
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || editing.get()>
                <EntityEditor manager=manager compact=compact />
            </Show>
        </div>
    }
}
