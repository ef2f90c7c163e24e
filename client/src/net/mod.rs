//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` sends raw HTTP, `api` is the request layer every caller goes
//! through, `error` is its normalized failure, and `types` defines the wire
//! schema.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
