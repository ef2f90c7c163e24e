//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and portfolio widgets. They read shared
//! state from Leptos context providers installed by `app::App`; data arrives
//! through props.

pub mod alert;
pub mod footer;
pub mod holding_card;
pub mod layout;
pub mod loading;
pub mod navbar;
pub mod summary_cards;
