//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gate` guards protected routes; `format` turns backend numbers into
//! display strings for pages and components.

pub mod format;
pub mod gate;
