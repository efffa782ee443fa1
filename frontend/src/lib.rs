//! Tepno Tech - Marketing site front-end (Rust/Leptos)
//!
//! A WebAssembly front-end rendering the site header: hero banner,
//! responsive navigation and the lead-capture popup.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Header (owns NavState)                                     │
//! │  ├── NavBar                                                 │
//! │  │   ├── brand, desktop menu, Get Started                   │
//! │  │   └── MobileMenu (while is_menu_open)                    │
//! │  ├── HeroTitle (title, breadcrumb)                          │
//! │  └── LeadForm (while is_popup_visible)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Nav items, form fields, breadcrumb, errors
//! - [`state`] - Header view state and style derivation
//! - [`components`] - UI components
//! - [`services`] - Browser plumbing (scroll subscription)

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Navigation
    nav_items, nav_path, NavItem, NAV_LABELS,
    // Form
    lead_form_fields, FormField, InputKind,
    // Breadcrumb
    breadcrumb_trail, Breadcrumb,
    // Errors
    SiteError, SiteResult,
};

// State
pub use state::NavState;

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and the console logger.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(LOG_LEVEL);
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <main>
                <Routes>
                    // Destination pages are not part of this site shell
                    <Route path="/*any" view=|| view! { <Header/> }/>
                </Routes>
            </main>
        </Router>
    }
}
