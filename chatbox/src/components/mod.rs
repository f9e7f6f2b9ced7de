//! Chat box UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the message log and command grammar from Leptos context
//! providers set up in `app`, and keep input-line state local.

pub mod game_chat;
pub mod suggestion_list;
