//! Pulseboard
//!
//! Patient risk and treatment analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Aggregate patient statistics at a glance
//! - Patient roster with risk stratification and vitals charts
//! - Treatment outcome analysis
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the patient analytics API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
