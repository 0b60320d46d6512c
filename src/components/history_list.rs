//! History list container and row component.
//!
//! DESIGN
//! ======
//! Markup and handlers come straight from a `Rendered` value: the whole
//! subtree is rebuilt whenever it changes, and each handler is taken from the
//! matching `Binding` (including whether it stops propagation to the row).

use leptos::prelude::*;

use crate::util::actions::Action;
use crate::util::history_view::{Binding, Control, EMPTY_CLASS, ItemView, ListView, Rendered};

/// The `#historyList` container.
#[component]
pub fn HistoryList(rendered: Memo<Rendered>, on_action: Callback<Action>) -> impl IntoView {
    let container_id = rendered.get_untracked().container.id;

    view! {
        <div id=container_id class="history-list">
            {move || {
                let rendered = rendered.get();
                match &rendered.list {
                    ListView::Empty { message } => {
                        view! { <div class=EMPTY_CLASS>{*message}</div> }.into_any()
                    }
                    ListView::Items(items) => {
                        items
                            .iter()
                            .map(|item| {
                                view! {
                                    <HistoryItem
                                        item=item.clone()
                                        view_binding=rendered.binding(&item.id, Control::View).cloned()
                                        repeat_binding=rendered.binding(&item.id, Control::Repeat).cloned()
                                        row_binding=rendered.binding(&item.id, Control::Row).cloned()
                                        on_action=on_action
                                    />
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

/// One `.history-item` row with view and repeat buttons.
#[component]
fn HistoryItem(
    item: ItemView,
    view_binding: Option<Binding>,
    repeat_binding: Option<Binding>,
    row_binding: Option<Binding>,
    on_action: Callback<Action>,
) -> impl IntoView {
    let ItemView { id, target, date, badge } = item;
    let view_id = id.clone();
    let repeat_id = id.clone();

    view! {
        <div class=Control::Row.class() attr:data-id=id on:click=click_handler(row_binding, on_action)>
            <div class="history-info">
                <div class="history-target">{target}</div>
                <div class="history-date">{date}</div>
            </div>
            <span class=badge.class>{badge.label}</span>
            <div class="history-actions">
                <button
                    class=Control::View.class()
                    attr:data-id=view_id
                    title="Просмотр"
                    on:click=click_handler(view_binding, on_action)
                >
                    "Просмотр"
                </button>
                <button
                    class=Control::Repeat.class()
                    attr:data-id=repeat_id
                    title="Повторить"
                    on:click=click_handler(repeat_binding, on_action)
                >
                    "Повторить"
                </button>
            </div>
        </div>
    }
}

fn click_handler(binding: Option<Binding>, on_action: Callback<Action>) -> impl Fn(leptos::ev::MouseEvent) + 'static {
    move |ev: leptos::ev::MouseEvent| {
        let Some(binding) = binding.as_ref() else {
            return;
        };
        if binding.stop_propagation {
            ev.stop_propagation();
        }
        on_action.run(binding.action.clone());
    }
}
