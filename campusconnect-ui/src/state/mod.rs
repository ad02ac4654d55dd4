//! State Management
//!
//! Bridges the client core's [`Portal`](campusconnect::Portal) into Leptos
//! reactivity.

pub mod global;

pub use global::{provide_global_state, use_global, GlobalState};
