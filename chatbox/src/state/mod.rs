//! Chat box state modules.
//!
//! DESIGN
//! ======
//! The message log and the input line are separate records so typing does not
//! re-render the log and appending a message does not touch the input.

pub mod chat;
pub mod input;
