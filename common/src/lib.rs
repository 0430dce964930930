//! Types and interaction logic shared by the backend API and the browser
//! components.
//!
//! Everything here is free of I/O: the backend fills the `model` types from
//! the store, the frontend drives the state machines in `citation` and
//! `anchor` from DOM events and timers.

pub mod anchor;
pub mod api;
pub mod citation;
pub mod listing;
pub mod model;
pub mod prose;
