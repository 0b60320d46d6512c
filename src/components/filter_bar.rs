//! Row of status filter buttons above the history list.
//!
//! DESIGN
//! ======
//! Activation only changes `HistoryState.filter`; the list re-renders from
//! the records already held, and the `active` class follows the state so
//! exactly one button carries it.

use leptos::prelude::*;

use crate::state::history::{Filter, FilterControl, HistoryState, filter_controls};

/// Filter buttons (`.filter-btn[data-filter]`), one marked `.active`.
#[component]
pub fn FilterBar() -> impl IntoView {
    let history = expect_context::<RwSignal<HistoryState>>();

    let controls = move || filter_controls(&history.get().filter);

    view! {
        <div class="history-filters">
            {move || {
                controls()
                    .into_iter()
                    .map(|control| {
                        let FilterControl { filter, label, active } = control;
                        let value = filter.as_str().to_owned();
                        let on_click = {
                            let value = value.clone();
                            move |_ev: leptos::ev::MouseEvent| {
                                history.update(|s| s.select_filter(Filter::parse(&value)));
                            }
                        };
                        view! {
                            <button
                                class="filter-btn"
                                class:active=active
                                attr:data-filter=value
                                on:click=on_click
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
