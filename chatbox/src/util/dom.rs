//! DOM side effects for the chat box: scroll pinning and input focus.
//!
//! TRADE-OFFS
//! ==========
//! Both helpers are browser-only; SSR and native builds no-op so rendering
//! stays deterministic on the server.

use leptos::html::{Div, Input};
use leptos::prelude::*;

/// Scroll the message log so the newest line is visible.
pub fn scroll_to_bottom(log_ref: NodeRef<Div>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = log_ref.get_untracked() {
            el.set_scroll_top(el.scroll_height());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = log_ref;
    }
}

/// Return keyboard focus to the chat input.
pub fn focus_input(input_ref: NodeRef<Input>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = input_ref.get_untracked() {
            let _ = el.focus();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input_ref;
    }
}
