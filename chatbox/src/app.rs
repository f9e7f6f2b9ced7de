//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::command::CommandGrammar;
use crate::components::game_chat::GameChat;
use crate::state::chat::ChatLog;
use crate::util::clock::now_ms;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the command grammar once and provides it, together with the
/// seeded message log, to the chat box.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let grammar = StoredValue::new(CommandGrammar::builtin());
    let chat_log = RwSignal::new(ChatLog::seeded(now_ms()));

    provide_context(grammar);
    provide_context(chat_log);

    view! {
        <Stylesheet id="leptos" href="/pkg/gamechat.css"/>
        <Title text="Game Chat"/>

        <Router>
            <main class="game-stage">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=GameChat/>
                </Routes>
            </main>
        </Router>
    }
}
