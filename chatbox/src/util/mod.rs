//! Browser environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate-only glue lives here so state and command modules stay plain Rust
//! and compile natively for tests and SSR.

pub mod clock;
pub mod dom;
