//! CampusConnect Web Portal
//!
//! Student portal and admin console built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application. All behaviour
//! lives in the `campusconnect` client core; this crate supplies the browser
//! transport and storage, and renders the core's state as components.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
