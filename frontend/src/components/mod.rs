//! UI Components for the Tepno Tech site.
//!
//! # Layout Components
//! - [`Header`] - Hero banner owning all interactive state
//! - [`NavBar`] - Fixed navigation with desktop list and mobile panel
//! - [`HeroTitle`] - Page title and breadcrumb trail
//!
//! # Overlays
//! - [`LeadForm`] - "Request Web Development" modal

mod header;
mod hero;
mod lead_form;
mod nav;

pub use header::*;
pub use hero::*;
pub use lead_form::*;
pub use nav::*;
