//! Autocomplete dropdown rendered above the chat input.

use leptos::prelude::*;

use crate::command::CommandSpec;

/// List of matching commands with the highlighted row marked.
///
/// Each row shows the token and its usage example; clicking a row hands the
/// entry to `on_pick`.
#[component]
pub fn SuggestionList(
    suggestions: Memo<Vec<CommandSpec>>,
    #[prop(into)] selected: Signal<usize>,
    on_pick: Callback<CommandSpec>,
) -> impl IntoView {
    view! {
        <div class="game-chat__suggestions" role="listbox">
            {move || {
                let current = selected.get();
                suggestions
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, spec)| {
                        view! {
                            <div
                                class="game-chat__suggestion"
                                class:game-chat__suggestion--selected={index == current}
                                role="option"
                                on:mousedown=move |ev| ev.prevent_default()
                                on:click=move |_| on_pick.run(spec)
                            >
                                <div class="game-chat__suggestion-token">{spec.token}</div>
                                <div class="game-chat__suggestion-example">{spec.example}</div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
