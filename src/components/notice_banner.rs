//! Dismissible banner for action notices.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().notice.is_some()>
            <div class="notice" role="status">
                <p class="notice__text">{move || ui.get().notice.unwrap_or_default()}</p>
                <button class="btn notice__dismiss" on:click=move |_| ui.update(UiState::dismiss_notice)>
                    "OK"
                </button>
            </div>
        </Show>
    }
}
