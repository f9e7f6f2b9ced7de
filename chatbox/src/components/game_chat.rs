//! In-game chat box: message log, command input, and autocomplete.

use leptos::html::{Div, Input};
use leptos::prelude::*;

use crate::command::{CommandGrammar, CommandSpec};
use crate::components::suggestion_list::SuggestionList;
use crate::state::chat::{ChatLog, ChatMessage};
use crate::state::input::{ChatInputState, ChatKey};
use crate::util::clock::now_ms;
use crate::util::dom::{focus_input, scroll_to_bottom};

/// Chat box reading the shared `ChatLog` and `CommandGrammar` from context.
///
/// Input state is local to the widget; submitted lines are parsed, formatted,
/// and appended to the log.
#[component]
pub fn GameChat() -> impl IntoView {
    let chat_log = expect_context::<RwSignal<ChatLog>>();
    let grammar = expect_context::<StoredValue<CommandGrammar>>();

    let input = RwSignal::new(ChatInputState::default());
    let log_ref = NodeRef::<Div>::new();
    let input_ref = NodeRef::<Input>::new();

    let suggestions = Memo::new(move |_| {
        let text = input.with(|s| s.input.clone());
        grammar.with_value(|g| g.suggest(&text))
    });
    let dropdown_open = Memo::new(move |_| input.with(|s| grammar.with_value(|g| s.dropdown_open(g))));
    let selected = Signal::derive(move || input.with(|s| s.selected_suggestion));

    Effect::new(move || {
        let _ = chat_log.with(ChatLog::len);
        scroll_to_bottom(log_ref);
    });

    let do_submit = move || {
        let Some(raw) = input.try_update(ChatInputState::take_submission).flatten() else {
            return;
        };
        let message = grammar.with_value(|g| g.compose(&raw, now_ms()));
        #[cfg(feature = "hydrate")]
        log::debug!("chat submit kind={}", message.kind);
        chat_log.update(|l| l.push(message));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_submit();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let Some(key) = ChatKey::from_key(&ev.key()) else {
            return;
        };
        let handled = input
            .try_update(|s| grammar.with_value(|g| s.handle_key(key, g)))
            .unwrap_or(false);
        if handled {
            ev.prevent_default();
        }
    };

    let on_pick = Callback::new(move |spec: CommandSpec| {
        input.update(|s| s.complete(&spec));
        focus_input(input_ref);
    });

    view! {
        <div class="game-chat">
            <div class="game-chat__frame">
                <Show when=move || dropdown_open.get()>
                    <SuggestionList suggestions=suggestions selected=selected on_pick=on_pick/>
                </Show>

                <div class="game-chat__log" node_ref=log_ref>
                    <Show when=move || chat_log.with(ChatLog::is_empty)>
                        <div class="game-chat__empty">"No messages yet"</div>
                    </Show>
                    <For
                        each=move || chat_log.with(|l| l.messages().to_vec())
                        key=|msg: &ChatMessage| msg.id.clone()
                        children=move |msg: ChatMessage| {
                            let class = format!("game-chat__message {}", msg.kind.css_class());
                            view! { <div class=class>{msg.text}</div> }
                        }
                    />
                </div>

                <form class="game-chat__form" on:submit=on_submit>
                    <input
                        class="game-chat__input"
                        type="text"
                        autocomplete="off"
                        placeholder="Type a message or command..."
                        node_ref=input_ref
                        prop:value=move || input.with(|s| s.input.clone())
                        on:input=move |ev| input.update(|s| s.set_input(event_target_value(&ev)))
                        on:keydown=on_keydown
                    />
                </form>
            </div>
        </div>
    }
}
