//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and delegates repeated markup to
//! `components`. Pure helpers (validation, labels, formatting choices) live
//! beside the page and are tested in its `_test.rs` sibling.

pub mod blog;
pub mod chat;
pub mod contact;
pub mod dashboard;
pub mod lessons;
pub mod login;
pub mod not_found;
pub mod portfolio;
pub mod stock_search;
pub mod subscribe;
