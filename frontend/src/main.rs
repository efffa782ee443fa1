//! Entry point for the WASM application

use tepno_frontend::{init_logging, App};
use leptos::*;

pub fn main() {
    init_logging();

    log::info!("🦀 Tepno Tech - Starting Leptos App");

    mount_to_body(|| view! { <App/> })
}
