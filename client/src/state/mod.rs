//! Client-side state owned outside individual views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the session store, `query` the keyed coalescing cache that
//! `resources` builds per resource kind, and `form`/`chat` hold page-level
//! interaction state.

pub mod chat;
pub mod form;
pub mod query;
pub mod resources;
pub mod session;
