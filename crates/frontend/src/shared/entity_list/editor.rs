use super::TableRow;
use crate::shared::components::ui::Select;
use crate::shared::modal::Modal;
use crate::shared::notice::{Notice, NoticeKind};
use contracts::domain::common::{EditMode, EntityField, EntityListManager, InputKind};
use leptos::prelude::*;

/// Add/edit modal over the manager's open session.
///
/// Inputs are seeded once from the draft and then only write back through
/// `update_draft_field`, so partially typed numbers ("7.") survive while the
/// draft holds the parsed value.
#[component]
pub fn EntityEditor<R: TableRow>(
    manager: RwSignal<EntityListManager<R>>,
    #[prop(optional, into)] compact: Signal<bool>,
) -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);

    let (mode, initial) = manager.with_untracked(|m| {
        m.session()
            .map(|s| {
                let values: Vec<(R::Field, String)> = R::Field::all()
                    .iter()
                    .map(|field| (*field, s.draft.field_value(*field)))
                    .collect();
                (s.mode, values)
            })
            .unwrap_or((EditMode::Add, Vec::new()))
    });

    let title = format!("{} {}", mode.verb(), R::element_name());
    let commit_label = format!("{} {}", mode.commit_verb(), R::element_name());

    let on_close = Callback::new(move |_: ()| {
        manager.update(|m| m.cancel());
    });

    let handle_save = move |_| {
        match manager.try_update(|m| m.save()) {
            Some(Ok(id)) => {
                log::info!("{}: saved {}", R::entity_index(), id);
                set_error.set(None);
            }
            Some(Err(e)) => {
                if e.is_validation() {
                    log::warn!("{}: save rejected: {}", R::entity_index(), e);
                } else {
                    log::error!("{}: save failed: {}", R::entity_index(), e);
                }
                set_error.set(Some(e.to_string()));
            }
            None => {}
        }
    };

    let fields = initial
        .into_iter()
        .map(|(field, value)| {
            let set_value = move |raw: String| {
                manager.update(|m| m.update_draft_field(field, &raw));
            };
            let input = match field.input_kind() {
                InputKind::Choice(options) => {
                    let options: Vec<(String, String)> = options
                        .iter()
                        .map(|o| (o.to_string(), o.to_string()))
                        .collect();
                    view! {
                        <Select
                            value=Signal::derive(move || value.clone())
                            on_change=Callback::new(set_value)
                            options=options
                        />
                    }
                    .into_any()
                }
                kind => {
                    let input_type = if kind == InputKind::Number { "number" } else { "text" };
                    view! {
                        <input
                            type=input_type
                            class="form__input"
                            placeholder=field.label()
                            value=value
                            on:input=move |ev| set_value(event_target_value(&ev))
                        />
                    }
                    .into_any()
                }
            };
            view! {
                <div class="form__group">
                    <label class="form__label">{field.label()}</label>
                    {input}
                </div>
            }
        })
        .collect_view();

    view! {
        <Modal
            title=title
            on_close=on_close
            compact=compact
        >
            <Notice
                message=error
                kind=NoticeKind::Error
                on_dismiss=Callback::new(move |_: ()| set_error.set(None))
            />
            {fields}
            <div class="modal-footer">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="button button--primary" on:click=handle_save>
                    {commit_label}
                </button>
            </div>
        </Modal>
    }
}
