//! Browser services.
//!
//! # Services
//!
//! - [`scroll`] - Window scroll subscription released on drop

pub mod scroll;

pub use scroll::*;
