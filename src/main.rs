//! SportSee Dashboard
//!
//! Fitness analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Per-user dashboard: daily activity, session durations, performance
//!   radar, goal score and nutrition summary
//! - Live HTTP backend or compiled-in mock fixtures, selected at startup
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Each dashboard mount fetches the four data categories for
//! the routed user, formats them into chart-friendly shapes and renders
//! them on HTML5 Canvas.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
